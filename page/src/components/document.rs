//! Root document component for static export.

use super::LandingPage;
use crate::config::LandingConfig;
use crate::content::BRAND;
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document: head with inline CSS, body with the page.
#[component]
pub fn PageDocument(
    /// Host content for the page body and meta description
    config: LandingConfig,
) -> impl IntoView {
    let description = config.hero_subtitle.clone();
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{format!("{BRAND} | Think Ahead. See Ahead.")}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage config=config />
            </body>
        </html>
    }
}

//! Image with a silent placeholder fallback.

use super::icons::{ICON_IMAGE, Icon};
use leptos::prelude::*;
use tracing::debug;
use url::Url;

/// Whether `src` is worth handing to the browser at all.
///
/// Absolute URLs must use a scheme an `<img>` can load; relative paths are
/// accepted as long as they contain no whitespace.
pub fn is_displayable_src(src: &str) -> bool {
    let src = src.trim();
    if src.is_empty() {
        return false;
    }
    match Url::parse(src) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "data" | "blob"),
        Err(url::ParseError::RelativeUrlWithoutBase) => !src.chars().any(char::is_whitespace),
        Err(_) => false,
    }
}

/// `<img>` that swaps itself for a placeholder graphic when the source is
/// unusable or the browser fails to load it. There is no visible error state.
#[component]
pub fn ImageWithFallback(
    /// Image URL
    #[prop(into)]
    src: String,
    /// Alt text
    #[prop(optional, into)]
    alt: String,
    /// Extra class for both the image and its placeholder
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let usable = is_displayable_src(&src);
    if !usable {
        debug!(src = %src, "unusable image source, rendering placeholder");
    }
    let (failed, set_failed) = signal(!usable);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! { <ImagePlaceholder class=class /> }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class
                on:error=move |_| {
                    debug!("image failed to load, rendering placeholder");
                    set_failed.set(true);
                }
            />
        </Show>
    }
}

#[component]
fn ImagePlaceholder(class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("image-fallback {class}") role="img" aria-label="Image unavailable">
            <Icon paths=ICON_IMAGE size="40" class="image-fallback-icon" />
        </div>
    }
}

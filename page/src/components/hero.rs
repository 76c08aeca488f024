use super::icons::{ICON_ARROW_RIGHT, Icon};
use super::image::ImageWithFallback;
use crate::content::{HERO_IMAGE_ALT, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, title_lines};
use crate::state::{TAGLINE_INTERVAL, TaglineRotation};
use leptos::prelude::*;
use tracing::warn;

/// Headline block: tagline, title lines, subtitle, CTAs and the hero artwork.
#[component]
pub fn Hero(
    /// Headline, split into one line per sentence
    #[prop(into)]
    title: String,
    /// Paragraph under the headline
    #[prop(into)]
    subtitle: String,
    /// Artwork URL; unusable sources show the placeholder
    #[prop(into)]
    image: String,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <TaglineRotator />
                        <h1 class="hero-title">
                            {title_lines(&title)
                                .into_iter()
                                .map(|line| view! { <span class="hero-title-line">{line}</span> })
                                .collect_view()}
                        </h1>
                        <p class="hero-subtitle">{subtitle}</p>
                        <div class="hero-actions">
                            <button class="btn btn-primary">
                                {HERO_PRIMARY_CTA}
                                <Icon paths=ICON_ARROW_RIGHT size="18" class="btn-arrow" />
                            </button>
                            <button class="btn btn-secondary">{HERO_SECONDARY_CTA}</button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-frame">
                            <ImageWithFallback src=image alt=HERO_IMAGE_ALT class="hero-image" />
                            <div class="hero-fade"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Cycles through the taglines every [`TAGLINE_INTERVAL`].
///
/// The timer only exists in the browser; static rendering shows the first line.
#[component]
pub fn TaglineRotator() -> impl IntoView {
    let (rotation, set_rotation) = signal(TaglineRotation::default());

    Effect::new(move || {
        let tick = move || {
            set_rotation.update(|r| {
                r.advance();
            })
        };
        match set_interval_with_handle(tick, TAGLINE_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => warn!(?err, "failed to start tagline timer"),
        }
    });

    view! {
        <div class="tagline">
            {move || {
                let r = rotation.get();
                view! {
                    <div class="tagline-text" data-index=r.index().to_string()>
                        {r.current()}
                    </div>
                }
            }}
        </div>
    }
}

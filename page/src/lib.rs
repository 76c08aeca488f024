//! # visiocorp-page
//!
//! The VisioCorp marketing landing page as Leptos components.
//!
//! The same component tree serves two targets:
//!
//! - **Browser** (`csr` feature): the `visiocorp-landing` binary mounts
//!   [`components::LandingPage`] and the tagline timer and image error
//!   handlers run live.
//! - **Static export**: [`render_page`] / [`render_fragment`] produce HTML
//!   through Leptos' `RenderHtml`, no reactive runtime needed.
//!
//! A host design tool configures the page through six properties declared in
//! [`properties`]; values arrive as a [`config::LandingConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use visiocorp_page::{config::LandingConfig, render_page};
//!
//! let config = LandingConfig::default()
//!     .with_overrides([("heroTitle", "Seek insight.")])
//!     .unwrap();
//! let html = render_page(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Seek insight."));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - host-editable fields, loading and overrides
//! - [`properties`] - property panel schema for the host
//! - [`state`] - tagline rotation and mobile menu state
//! - [`content`] - fixed copy for every section
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constant

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod properties;
pub mod state;
pub mod styles;

use components::{LandingPage, PageDocument};
use config::LandingConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete HTML document, starting with `<!DOCTYPE html>`.
pub fn render_page(config: &LandingConfig) -> String {
    let doc = view! { <PageDocument config=config.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page markup, for embedding into a host document.
pub fn render_fragment(config: &LandingConfig) -> String {
    view! { <LandingPage config=config.clone() /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_page(&LandingConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("VisioCorp"));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        let html = render_fragment(&LandingConfig::default());
        assert!(!html.contains("<html"));
        assert!(!html.contains("<style>"));
        assert!(html.contains("class=\"landing\""));
    }

    #[test]
    fn subtitle_doubles_as_meta_description() {
        let config = LandingConfig::default()
            .with_overrides([("heroSubtitle", "Quiet intelligence.")])
            .unwrap();
        let html = render_page(&config);
        assert!(html.contains("content=\"Quiet intelligence.\""));
    }
}

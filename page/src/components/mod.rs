//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── LandingPage
//!     ├── Navbar            (MenuState)
//!     ├── Hero
//!     │   ├── TaglineRotator (TaglineRotation + interval timer)
//!     │   └── ImageWithFallback
//!     ├── ShippingSection
//!     │   └── ProductCard x3 ── ImageWithFallback
//!     ├── ProcessSection
//!     ├── EcosystemMap
//!     ├── DivisionsSection
//!     ├── Newsletter
//!     └── Footer
//! ```

mod divisions;
mod document;
mod ecosystem;
mod footer;
mod hero;
pub mod icons;
mod image;
mod nav;
mod newsletter;
mod page;
mod process;
mod products;

pub use divisions::DivisionsSection;
pub use document::PageDocument;
pub use ecosystem::EcosystemMap;
pub use footer::Footer;
pub use hero::{Hero, TaglineRotator};
pub use icons::Icon;
pub use image::{ImageWithFallback, is_displayable_src};
pub use nav::Navbar;
pub use newsletter::Newsletter;
pub use page::LandingPage;
pub use process::ProcessSection;
pub use products::{ProductCard, ShippingSection};

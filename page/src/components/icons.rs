//! Inline SVG stroke icons (Lucide style, 24x24 grid).
//!
//! Each icon is a list of path strings so circles and rects can be
//! expressed as arcs/lines and rendered with one `<path>` per entry.

use leptos::prelude::*;

/// Path data for one icon.
pub type IconPaths = &'static [&'static str];

/// Renders an inline stroke icon.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_ARROW_RIGHT size="18" /> }
/// ```
#[component]
pub fn Icon(
    /// Path data, one entry per `<path>` element
    paths: IconPaths,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

/// Call-to-action arrow
pub const ICON_ARROW_RIGHT: IconPaths = &["M5 12h14", "m12 5 7 7-7 7"];

/// "View all" chevron
pub const ICON_CHEVRON_RIGHT: IconPaths = &["m9 18 6-6-6-6"];

/// Burger shown while the mobile menu is closed
pub const ICON_MENU: IconPaths = &["M4 6h16", "M4 12h16", "M4 18h16"];

/// Close icon shown while the mobile menu is open
pub const ICON_X: IconPaths = &["M18 6 6 18", "m6 6 12 12"];

/// Products branch
pub const ICON_ZAP: IconPaths = &[
    "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
];

/// Divisions branch
pub const ICON_LAYERS: IconPaths = &[
    "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
    "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
    "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
];

/// Media branch
pub const ICON_RADIO: IconPaths = &[
    "M4.9 19.1C1 15.2 1 8.8 4.9 4.9",
    "M7.8 16.2c-2.3-2.3-2.3-6.1 0-8.5",
    "M14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
    "M16.2 7.8c2.3 2.3 2.3 6.1 0 8.5",
    "M19.1 4.9C23 8.8 23 15.1 19.1 19",
];

/// Research Labs
pub const ICON_BEAKER: IconPaths = &[
    "M4.5 3h15",
    "M6 3v16a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V3",
    "M6 14h12",
];

/// AdvancedAfricaAI
pub const ICON_CPU: IconPaths = &[
    "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M9 9h6v6H9z",
    "M15 2v2",
    "M15 20v2",
    "M2 15h2",
    "M2 9h2",
    "M20 15h2",
    "M20 9h2",
    "M9 2v2",
    "M9 20v2",
];

/// VisioClub
pub const ICON_USERS: IconPaths = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

/// Corpo
pub const ICON_MONITOR: IconPaths = &[
    "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M8 21h8",
    "M12 17v4",
];

/// VM International
pub const ICON_GLOBE: IconPaths = &[
    "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
    "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
    "M2 12h20",
];

/// Generic picture frame shown when an image cannot be displayed
pub const ICON_IMAGE: IconPaths = &[
    "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M11 9a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
    "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
];

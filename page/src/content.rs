//! Fixed marketing copy for every section of the page.
//!
//! Only the hero text and the four images are host-configurable (see
//! [`crate::config`]); everything else lives here as typed data.

use crate::components::icons::{
    ICON_BEAKER, ICON_CPU, ICON_GLOBE, ICON_LAYERS, ICON_MONITOR, ICON_RADIO, ICON_USERS, ICON_ZAP,
    IconPaths,
};

/// Brand name in the navbar, ecosystem root and footer.
pub const BRAND: &str = "VisioCorp";

/// A navigation target inside the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// In-page anchor
    pub href: &'static str,
}

/// Section links, desktop and mobile.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Products", href: "#products" },
    NavLink { label: "Divisions", href: "#divisions" },
    NavLink { label: "MirageMirror", href: "#media" },
    NavLink { label: "Radio", href: "#radio" },
    NavLink { label: "About", href: "#about" },
];

/// Rendered apart from [`NAV_LINKS`] with its own style.
pub const LOGIN_LINK: NavLink = NavLink { label: "Login", href: "#login" };

/// Solid hero button.
pub const HERO_PRIMARY_CTA: &str = "Get Visio Creative Suite v1";
/// Outlined hero button.
pub const HERO_SECONDARY_CTA: &str = "Explore the Corporation";
/// Alt text for the hero artwork.
pub const HERO_IMAGE_ALT: &str = "VisioCorp HQ Abstract";

/// Release stage shown as a badge on a product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductStatus {
    /// Generally available
    NowShipping,
    /// Early access
    Beta,
    /// Announced only
    ComingSoon,
}

impl ProductStatus {
    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::NowShipping => "Now Shipping",
            Self::Beta => "Beta",
            Self::ComingSoon => "Coming Soon",
        }
    }

    /// Badge style: shipping is solid, beta muted, everything else faded.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::NowShipping => "badge badge-solid",
            Self::Beta => "badge badge-muted",
            Self::ComingSoon => "badge badge-faded",
        }
    }
}

/// Product card copy. The image comes from the config slot with the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    /// Card heading
    pub title: &'static str,
    /// Small caption next to the badge
    pub subtitle: &'static str,
    /// Release stage badge
    pub status: ProductStatus,
    /// Card body
    pub description: &'static str,
}

/// Products in the "Now Shipping" grid, in card order.
pub const PRODUCTS: [Product; 3] = [
    Product {
        title: "Visio Creative Suite v1",
        subtitle: "The Main Offer",
        status: ProductStatus::NowShipping,
        description: "Your complete identity and rollout operating system. Includes PR AI Assistant, Artist Portal, and Outreach tools.",
    },
    Product {
        title: "Robocorpo",
        subtitle: "Automation",
        status: ProductStatus::Beta,
        description: "Rent an online robot that works for you. Automate admin, research, and outreach tasks instantly.",
    },
    Product {
        title: "HGA Radio (Vol 1)",
        subtitle: "Media Product",
        status: ProductStatus::NowShipping,
        description: "A curated auditory experience. Listen to the sounds of the future corporation.",
    },
];

/// One step of the "how we work" strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    /// 1-based position
    pub number: u8,
    /// Step heading
    pub title: &'static str,
    /// Step body
    pub description: &'static str,
}

/// Collect, create, deploy.
pub const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        number: 1,
        title: "Collect Signal",
        description: "We monitor data streams and cultural shifts to identify opportunities before they manifest.",
    },
    ProcessStep {
        number: 2,
        title: "Create Strategy",
        description: "Visio Intel processes signal into actionable plans using advanced models.",
    },
    ProcessStep {
        number: 3,
        title: "Deploy Outcomes",
        description: "Launch products, campaigns, and narratives with precision timing.",
    },
];

/// One branch hanging off the VisioCorp root in the ecosystem diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcosystemBranch {
    /// Branch heading
    pub title: &'static str,
    /// Icon in the branch bubble
    pub icon: IconPaths,
    /// CSS modifier for the icon bubble tint
    pub accent: &'static str,
    /// Leaf names listed under the branch
    pub items: &'static [&'static str],
}

/// Branches of the ecosystem diagram, left to right.
pub const ECOSYSTEM: [EcosystemBranch; 3] = [
    EcosystemBranch {
        title: "Products",
        icon: ICON_ZAP,
        accent: "accent-blue",
        items: &["Creative Suite v1", "Robocorpo", "Studio Camp"],
    },
    EcosystemBranch {
        title: "Divisions",
        icon: ICON_LAYERS,
        accent: "accent-purple",
        items: &["Research Labs", "AdvancedAfricaAI", "VisioClub", "VM International"],
    },
    EcosystemBranch {
        title: "Media / Mythos",
        icon: ICON_RADIO,
        accent: "accent-pink",
        items: &["MirageMirror", "HGA Radio"],
    },
];

/// A card in the "Active Divisions" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Division {
    /// Card heading
    pub name: &'static str,
    /// Card body
    pub description: &'static str,
    /// Optional status pill, e.g. "Waitlist"
    pub status: Option<&'static str>,
    /// Card icon
    pub icon: IconPaths,
}

/// Divisions in grid order.
pub const DIVISIONS: [Division; 5] = [
    Division {
        name: "Visio Research Labs 🧪",
        description: "Experiments, prototypes, papers, and case studies pushing the boundaries of what's possible.",
        status: Some("Research"),
        icon: ICON_BEAKER,
    },
    Division {
        name: "AdvancedAfricaAI",
        description: "Sovereign enterprise AI direction, models, and large-scale data systems.",
        status: Some("Coming Soon"),
        icon: ICON_CPU,
    },
    Division {
        name: "VisioClub",
        description: "Membership, perks, early access, and community for the corporation's elite.",
        status: Some("Waitlist"),
        icon: ICON_USERS,
    },
    Division {
        name: "Corpo",
        description: "Fashion identity, drops, and the official Visio lookbook.",
        status: Some("In Development"),
        icon: ICON_MONITOR,
    },
    Division {
        name: "VM International",
        description: "Global operations, partnerships, and ventures holding.",
        status: Some("Restricted"),
        icon: ICON_GLOBE,
    },
];

/// A titled list of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    /// Column heading
    pub heading: &'static str,
    /// Link labels (all point at `#`)
    pub links: &'static [&'static str],
}

/// Footer link columns.
pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Products",
        links: &["Visio Creative Suite", "Robocorpo", "Studio Camp", "HGA Radio"],
    },
    FooterColumn {
        heading: "Divisions",
        links: &["Research Labs", "AdvancedAfricaAI", "VisioClub", "VM International"],
    },
    FooterColumn {
        heading: "Corporate",
        links: &["About", "Careers", "Contact", "Legal"],
    },
];

/// Text under the footer brand.
pub const FOOTER_BLURB: &str = "Think Ahead. See Ahead. Building the next era of African excellence through intelligence and design.";

/// Links next to the copyright line.
pub const LEGAL_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

/// Split a hero title into display lines, one per `.`-terminated sentence.
///
/// Blank pieces are dropped and each line gets its period back, so
/// `"Think Ahead. See Ahead."` and `"Think Ahead. See Ahead"` render alike.
pub fn title_lines(title: &str) -> Vec<String> {
    title
        .split('.')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{part}."))
        .collect()
}

/// Year printed in the copyright line.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Year printed in the copyright line.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_lines_splits_sentences() {
        assert_eq!(
            title_lines("Think Ahead. See Ahead."),
            vec!["Think Ahead.".to_string(), "See Ahead.".to_string()]
        );
    }

    #[test]
    fn title_lines_tolerates_missing_final_period() {
        assert_eq!(title_lines("Think Ahead. See Ahead"), title_lines("Think Ahead. See Ahead."));
        assert_eq!(title_lines("Seek insight"), vec!["Seek insight.".to_string()]);
    }

    #[test]
    fn title_lines_drops_blank_parts() {
        assert_eq!(title_lines(""), Vec::<String>::new());
        assert_eq!(title_lines(" . .. "), Vec::<String>::new());
        assert_eq!(title_lines("One.. Two."), vec!["One.".to_string(), "Two.".to_string()]);
    }

    #[test]
    fn status_badges() {
        assert_eq!(ProductStatus::NowShipping.badge_class(), "badge badge-solid");
        assert_eq!(ProductStatus::Beta.badge_class(), "badge badge-muted");
        assert_eq!(ProductStatus::ComingSoon.badge_class(), "badge badge-faded");
        assert_eq!(PRODUCTS[1].status.label(), "Beta");
    }

    #[test]
    fn ecosystem_lists_every_branch_item() {
        let total: usize = ECOSYSTEM.iter().map(|b| b.items.len()).sum();
        assert_eq!(total, 9);
        assert_eq!(ECOSYSTEM[2].items, &["MirageMirror", "HGA Radio"]);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = PROCESS_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}

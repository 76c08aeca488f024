use visiocorp_page::config::{
    DEFAULT_HERO_IMAGE, DEFAULT_HERO_SUBTITLE, DEFAULT_PRODUCT1_IMAGE, DEFAULT_PRODUCT2_IMAGE,
    DEFAULT_PRODUCT3_IMAGE, HERO_IMAGE, KEYS, LandingConfig,
};
use visiocorp_page::content::{DIVISIONS, ECOSYSTEM, NAV_LINKS, PROCESS_STEPS, PRODUCTS};
use visiocorp_page::state::TAGLINES;
use visiocorp_page::{render_fragment, render_page};

const PLACEHOLDER_MARKER: &str = "aria-label=\"Image unavailable\"";

fn html_attr(value: &str) -> String {
    value.replace('&', "&amp;")
}

fn with(key: &str, value: &str) -> LandingConfig {
    LandingConfig::default()
        .with_overrides([(key, value)])
        .expect("known key")
}

#[test]
fn default_render_shows_documented_defaults() {
    let html = render_fragment(&LandingConfig::default());

    assert!(html.contains("Think Ahead."), "title line 1");
    assert!(html.contains("See Ahead."), "title line 2");
    assert!(html.contains(DEFAULT_HERO_SUBTITLE));
    for url in [
        DEFAULT_HERO_IMAGE,
        DEFAULT_PRODUCT1_IMAGE,
        DEFAULT_PRODUCT2_IMAGE,
        DEFAULT_PRODUCT3_IMAGE,
    ] {
        assert!(
            html.contains(&html_attr(url)),
            "default image missing: {url}"
        );
    }
    assert!(!html.contains(PLACEHOLDER_MARKER));
}

#[test]
fn title_renders_one_line_per_sentence() {
    let html = render_fragment(&with("heroTitle", "Seek insight. See beyond. Think"));
    assert_eq!(html.matches("class=\"hero-title-line\"").count(), 3);
    assert!(html.contains("Think.</span>"));
}

#[test]
fn every_section_is_present_in_order() {
    let html = render_page(&LandingConfig::default());
    let markers = [
        "class=\"nav\"",
        "class=\"hero\"",
        "id=\"products\"",
        "How Visio Works",
        "The Ecosystem",
        "id=\"divisions\"",
        "Join the Corporation Updates",
        "class=\"footer\"",
    ];
    let mut cursor = 0;
    for marker in markers {
        let found = html[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("{marker} missing or out of order"));
        cursor += found + marker.len();
    }
}

#[test]
fn static_content_is_rendered() {
    let html = render_fragment(&LandingConfig::default());
    for product in PRODUCTS {
        assert!(html.contains(product.title));
        assert!(html.contains(product.status.label()));
    }
    for step in PROCESS_STEPS {
        assert!(html.contains(step.title));
    }
    for branch in ECOSYSTEM {
        for item in branch.items {
            assert!(html.contains(item), "ecosystem item {item}");
        }
    }
    for division in DIVISIONS {
        assert!(html.contains(division.name), "division {}", division.name);
        assert!(html.contains(division.status.unwrap_or_default()));
    }
    for link in NAV_LINKS {
        assert!(html.contains(&format!("href=\"{}\"", link.href)));
    }
    assert!(html.contains("All rights reserved."));
}

#[test]
fn tagline_starts_at_first_phrase() {
    let html = render_fragment(&LandingConfig::default());
    assert!(html.contains(TAGLINES[0]));
    assert!(!html.contains(TAGLINES[1]));
    assert!(html.contains("data-index=\"0\""));
}

#[test]
fn mobile_menu_starts_closed() {
    let html = render_fragment(&LandingConfig::default());
    assert!(!html.contains("class=\"nav-mobile\""));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn invalid_image_falls_back_in_every_slot() {
    for key in KEYS.iter().filter(|k| k.ends_with("Image")) {
        let html = render_fragment(&with(key, "not a valid url"));
        assert_eq!(
            html.matches(PLACEHOLDER_MARKER).count(),
            1,
            "{key} should render exactly one placeholder"
        );
        assert!(!html.contains("src=\"not a valid url\""));
    }
}

#[test]
fn empty_image_falls_back() {
    let html = render_fragment(&with(HERO_IMAGE, ""));
    assert_eq!(html.matches(PLACEHOLDER_MARKER).count(), 1);
    assert!(html.contains("class=\"image-fallback hero-image\""));
}

#[test]
fn all_images_invalid_gives_four_placeholders() {
    let config = LandingConfig::default()
        .with_overrides(
            KEYS.iter()
                .filter(|k| k.ends_with("Image"))
                .map(|k| (*k, "javascript:void(0)")),
        )
        .expect("known keys");
    let html = render_fragment(&config);
    assert_eq!(html.matches(PLACEHOLDER_MARKER).count(), 4);
    assert!(!html.contains("<img"));
}

#[test]
fn custom_image_urls_are_used() {
    let html = render_fragment(&with("product2Image", "https://cdn.example/robot.png"));
    assert!(html.contains("src=\"https://cdn.example/robot.png\""));
    assert!(!html.contains(&html_attr(DEFAULT_PRODUCT2_IMAGE)));
}

#[test]
fn host_text_is_escaped() {
    let config = LandingConfig::default()
        .with_overrides([
            ("heroTitle", "<b>Hi</b>"),
            ("heroSubtitle", "a\"b<c"),
            ("heroImage", "https://cdn.example/a.png\" onerror=\"alert(1)"),
        ])
        .expect("known keys");
    let html = render_page(&config);

    assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;."));
    assert!(!html.contains("<b>Hi"));
    assert!(html.contains("content=\"a&quot;b&lt;c\""));
    assert!(!html.contains("onerror=\"alert"));
}

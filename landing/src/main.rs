// VisioCorp Landing Page - Leptos 0.8 browser build
//
// Host overrides come in through the query string, e.g.
// `index.html?heroTitle=Seek+insight.&product1Image=https://...`

use leptos::prelude::*;
use visiocorp_page::components::LandingPage;
use visiocorp_page::config::LandingConfig;
use visiocorp_page::styles::PAGE_CSS;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    let config = config_from_location();
    print_banner(&config);
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: LandingConfig) -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <LandingPage config=config />
    }
}

/// Config from `window.location.search`, defaults when unavailable.
fn config_from_location() -> LandingConfig {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| LandingConfig::from_query(&search))
        .unwrap_or_default()
}

fn print_banner(config: &LandingConfig) {
    web_sys::console::log_2(
        &JsValue::from_str("%cVisioCorp // See beyond the mirage."),
        &JsValue::from_str("color: #000; font-weight: bold; letter-spacing: 0.1em;"),
    );
    if *config != LandingConfig::default() {
        web_sys::console::log_1(&JsValue::from_str("[visiocorp] custom page properties applied"));
    }
}

use super::{
    DivisionsSection, EcosystemMap, Footer, Hero, Navbar, Newsletter, ProcessSection,
    ShippingSection,
};
use crate::config::LandingConfig;
use leptos::prelude::*;

/// The whole landing page, sections in display order.
#[component]
pub fn LandingPage(
    /// Host content; defaults when omitted
    #[prop(optional)]
    config: LandingConfig,
) -> impl IntoView {
    let LandingConfig {
        hero_title,
        hero_subtitle,
        hero_image,
        product1_image,
        product2_image,
        product3_image,
    } = config;

    view! {
        <div class="landing">
            <Navbar />
            <main>
                <Hero title=hero_title subtitle=hero_subtitle image=hero_image />
                <ShippingSection images=[product1_image, product2_image, product3_image] />
                <ProcessSection />
                <EcosystemMap />
                <DivisionsSection />
                <Newsletter />
            </main>
            <Footer />
        </div>
    }
}

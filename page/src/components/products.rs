use super::icons::{ICON_ARROW_RIGHT, ICON_CHEVRON_RIGHT, Icon};
use super::image::ImageWithFallback;
use crate::content::{PRODUCTS, Product};
use leptos::prelude::*;

/// "Now Shipping" showcase. `images` pairs positionally with the product list.
#[component]
pub fn ShippingSection(
    /// One URL per entry in [`PRODUCTS`], same order
    images: [String; 3],
) -> impl IntoView {
    view! {
        <section id="products" class="section section-products">
            <div class="container">
                <div class="section-head-split">
                    <div>
                        <h2 class="section-title">"Now Shipping"</h2>
                        <p class="section-lead">"The latest deployments from the Visio factories."</p>
                    </div>
                    <a href="#" class="catalogue-link">
                        "View Full Catalogue"
                        <Icon paths=ICON_CHEVRON_RIGHT size="16" />
                    </a>
                </div>
                <div class="product-grid">
                    {PRODUCTS
                        .iter()
                        .zip(images)
                        .map(|(product, image)| view! { <ProductCard product=*product image=image /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Image, status badge and copy for one product.
#[component]
pub fn ProductCard(
    /// Card copy and status
    product: Product,
    /// Card image URL
    #[prop(into)]
    image: String,
) -> impl IntoView {
    view! {
        <article class="product-card">
            <span class=product.status.badge_class()>{product.status.label()}</span>
            <div class="product-media">
                <ImageWithFallback src=image alt=product.title class="product-image" />
            </div>
            <div class="product-body">
                <h3 class="product-title">{product.title}</h3>
                <p class="product-subtitle">{product.subtitle}</p>
                <p class="product-description">{product.description}</p>
                <button class="product-explore">
                    "Explore"
                    <Icon paths=ICON_ARROW_RIGHT size="16" />
                </button>
            </div>
        </article>
    }
}

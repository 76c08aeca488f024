use super::icons::Icon;
use crate::content::{BRAND, ECOSYSTEM, EcosystemBranch};
use leptos::prelude::*;

/// Org-chart style diagram: the brand root with one column per branch.
#[component]
pub fn EcosystemMap() -> impl IntoView {
    view! {
        <section class="section section-ecosystem">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-title">"The Ecosystem"</h2>
                    <p class="section-lead">"Structured for clarity. Built for scale."</p>
                </div>
                <div class="eco-tree">
                    <div class="eco-root">
                        <span class="eco-root-label">{BRAND}</span>
                        <div class="eco-stem"></div>
                    </div>
                    <div class="eco-branches">
                        <div class="eco-connector"></div>
                        {ECOSYSTEM
                            .iter()
                            .map(|branch| view! { <EcosystemNode branch=*branch /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EcosystemNode(branch: EcosystemBranch) -> impl IntoView {
    view! {
        <div class="eco-branch">
            <div class="eco-drop"></div>
            <div class="eco-card">
                <div class=format!("eco-icon {}", branch.accent)>
                    <Icon paths=branch.icon size="20" />
                </div>
                <h3 class="eco-title">{branch.title}</h3>
                <ul class="eco-items">
                    {branch.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::content::{DIVISIONS, Division};
use leptos::prelude::*;

/// "Active Divisions" grid.
#[component]
pub fn DivisionsSection() -> impl IntoView {
    view! {
        <section id="divisions" class="section section-divisions">
            <div class="container container-narrow">
                <div class="section-head">
                    <span class="section-eyebrow">"Structure"</span>
                    <h2 class="section-title">"Active Divisions"</h2>
                </div>
                <div class="division-list">
                    {DIVISIONS
                        .iter()
                        .map(|division| view! { <DivisionItem division=*division /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DivisionItem(division: Division) -> impl IntoView {
    view! {
        <div class="division-item">
            <div class="division-icon">
                <Icon paths=division.icon />
            </div>
            <div class="division-body">
                <div class="division-head">
                    <h3 class="division-name">{division.name}</h3>
                    {division.status.map(|status| view! { <span class="division-status">{status}</span> })}
                </div>
                <p class="division-description">{division.description}</p>
            </div>
            <div class="division-arrow">
                <Icon paths=ICON_ARROW_RIGHT size="20" />
            </div>
        </div>
    }
}

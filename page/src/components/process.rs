use crate::content::{PROCESS_STEPS, ProcessStep};
use leptos::prelude::*;

/// The three-step "how we work" strip.
#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section class="section section-process">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-title">"How Visio Works"</h2>
                    <p class="section-lead">
                        "Our fundamental operating procedure for generating value and insight."
                    </p>
                </div>
                <div class="process-grid">
                    // Connector between the step bubbles on wide screens
                    <div class="process-line"></div>
                    {PROCESS_STEPS
                        .iter()
                        .map(|step| view! { <ProcessStepCard step=*step /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProcessStepCard(step: ProcessStep) -> impl IntoView {
    view! {
        <div class="process-step">
            <div class="process-number">{step.number}</div>
            <div>
                <h3 class="process-title">{step.title}</h3>
                <p class="process-description">{step.description}</p>
            </div>
        </div>
    }
}

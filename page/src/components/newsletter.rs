use leptos::prelude::*;

/// Signup form. It is presentational only; nothing is submitted.
#[component]
pub fn Newsletter() -> impl IntoView {
    view! {
        <section class="section section-newsletter">
            <div class="container container-tight">
                <h2 class="newsletter-title">"Join the Corporation Updates"</h2>
                <p class="newsletter-lead">
                    "Receive intelligence, product drops, and research papers directly to your inbox."
                </p>
                <form class="newsletter-form" on:submit=|ev| ev.prevent_default()>
                    <input
                        type="email"
                        class="newsletter-input"
                        placeholder="Enter your email address"
                        aria-label="Email address"
                    />
                    <button type="submit" class="btn btn-dark">"Subscribe"</button>
                </form>
            </div>
        </section>
    }
}

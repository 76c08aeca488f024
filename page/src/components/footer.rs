use crate::content::{BRAND, FOOTER_BLURB, FOOTER_COLUMNS, LEGAL_LINKS, current_year};
use leptos::prelude::*;

/// Brand blurb, link columns and the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-logo">{BRAND}</span>
                        <p class="footer-blurb">{FOOTER_BLURB}</p>
                    </div>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4 class="footer-heading">{column.heading}</h4>
                                    <ul class="footer-list">
                                        {column
                                            .links
                                            .iter()
                                            .map(|label| view! { <li><a href="#" class="footer-link">{*label}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer-bottom">
                    <div class="footer-copyright">
                        {format!("© {} {BRAND}. All rights reserved.", current_year())}
                    </div>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| view! { <a href="#" class="footer-legal-link">{*label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

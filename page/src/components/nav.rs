use super::icons::{ICON_MENU, ICON_X, Icon};
use crate::content::{BRAND, LOGIN_LINK, NAV_LINKS};
use crate::state::MenuState;
use leptos::prelude::*;

/// Top navigation bar with a collapsible mobile menu.
///
/// The menu button swaps between the burger and close icons and toggles the
/// mobile panel; following a panel link closes it again.
#[component]
pub fn Navbar(
    /// Menu state at first render (closed unless given)
    #[prop(optional)]
    initial: MenuState,
) -> impl IntoView {
    let (menu, set_menu) = signal(initial);

    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <a href="#" class="nav-brand">{BRAND}</a>
                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                            .collect_view()}
                        <a href=LOGIN_LINK.href class="nav-link nav-login">{LOGIN_LINK.label}</a>
                    </div>
                    <button
                        class="nav-menu-btn"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(MenuState::toggle)
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon paths=ICON_X /> }.into_any()
                            } else {
                                view! { <Icon paths=ICON_MENU /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile panel
            <Show when=move || menu.get().is_open()>
                <div class="nav-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="nav-mobile-link"
                                    on:click=move |_| set_menu.update(MenuState::close)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="nav-mobile-footer">
                        <a
                            href=LOGIN_LINK.href
                            class="nav-mobile-login"
                            on:click=move |_| set_menu.update(MenuState::close)
                        >
                            {LOGIN_LINK.label}
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const MENU_PATH: &str = "d=\"M4 6h16\"";
    const CLOSE_PATH: &str = "d=\"M18 6 6 18\"";

    fn render(initial: MenuState) -> String {
        view! { <Navbar initial=initial /> }.to_html()
    }

    fn opened() -> MenuState {
        let mut state = MenuState::default();
        state.toggle();
        state
    }

    #[test]
    fn closed_menu_shows_burger_and_no_panel() {
        let html = render(MenuState::default());
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains(MENU_PATH));
        assert!(!html.contains(CLOSE_PATH));
        assert!(!html.contains("class=\"nav-mobile\""));
    }

    #[test]
    fn open_menu_shows_close_icon_and_panel() {
        let html = render(opened());
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains(CLOSE_PATH));
        assert!(!html.contains(MENU_PATH));
        assert!(html.contains("class=\"nav-mobile\""));
        assert_eq!(html.matches("class=\"nav-mobile-link\"").count(), NAV_LINKS.len());
        assert!(html.contains("class=\"nav-mobile-login\""));
    }

    #[test]
    fn each_activation_flips_the_rendered_menu() {
        let mut state = MenuState::default();
        state.toggle();
        assert!(render(state).contains("class=\"nav-mobile\""));
        state.toggle();
        let html = render(state);
        assert!(!html.contains("class=\"nav-mobile\""));
        assert!(html.contains(MENU_PATH));
    }

    #[test]
    fn following_a_link_closes_the_panel() {
        let mut state = opened();
        state.close();
        assert_eq!(render(state), render(MenuState::default()));
    }
}

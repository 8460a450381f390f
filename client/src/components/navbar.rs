//! Top bar with role navigation, user badge and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logging out only clears the session; the route guard of the current page
//! then sends the browser to `/login`.

use leptos::prelude::*;

use crate::routes::ROOT_PATH;
use crate::state::auth::AuthGate;
use crate::state::ui::UiState;
use crate::util::auth::root_redirect;
use crate::util::nav::{navbar_items, role_label, shows_logout};

#[component]
pub fn Navbar() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let ui = expect_context::<RwSignal<UiState>>();

    let items = move || navbar_items(gate.state());
    let label = move || role_label(gate.state());
    let menu_open = move || ui.get().menu_open;
    // Before the splash ends the server cannot know the role; `/` forwards anyway.
    let brand_href = move || if ui.get().ready { root_redirect(gate.state()) } else { ROOT_PATH };

    let on_logout = move |_| {
        gate.logout();
        ui.update(|u| u.menu_open = false);
    };
    let on_menu_toggle = move |_| ui.update(|u| u.menu_open = !u.menu_open);

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a class="navbar__brand" href=brand_href title="Smart City Platform">
                    "Smart City"
                </a>
                <Show when=move || ui.get().ready>
                    <div class="navbar__links">
                        {move || {
                            items()
                                .iter()
                                .map(|item| view! { <a class="navbar__link" href=item.path>{item.label}</a> })
                                .collect_view()
                        }}
                    </div>
                    <span class="navbar__spacer"></span>
                    <span class="navbar__user">{label}</span>
                    <Show when=move || shows_logout(gate.state())>
                        <button class="btn navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </Show>
                <button
                    class="btn navbar__menu-toggle"
                    on:click=on_menu_toggle
                    aria-label=move || if menu_open() { "Close main menu" } else { "Open main menu" }
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.get().ready && menu_open()>
                <div class="navbar__menu">
                    {move || {
                        items()
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        class="navbar__menu-link"
                                        href=item.path
                                        on:click=move |_| ui.update(|u| u.menu_open = false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                    <div class="navbar__menu-user">{label}</div>
                    <Show when=move || shows_logout(gate.state())>
                        <button class="btn navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}

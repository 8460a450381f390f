//! Collapsible side panel listing the destinations of the current role.
//!
//! ARCHITECTURE
//! ============
//! Collapse state lives in `UiState` so the manual toggle and the responsive
//! rule write to the same flag. The resize listener only exists in the
//! browser build.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthGate;
use crate::state::ui::UiState;
use crate::util::nav::{sidebar_items, sidebar_link_class};

#[component]
pub fn Sidebar() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    {
        let fit = move || {
            let width = web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64());
            if let Some(width) = width {
                ui.update(|u| u.fit_to_width(width));
            }
        };
        Effect::new(move |_| fit());
        let handle = window_event_listener(leptos::ev::resize, move |_| fit());
        on_cleanup(move || handle.remove());
    }

    let collapsed = move || ui.get().sidebar_collapsed;
    let on_toggle = move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);

    view! {
        <aside class=move || if collapsed() { "sidebar sidebar--collapsed" } else { "sidebar" }>
            <div class="sidebar__header">
                <button
                    class="btn sidebar__toggle"
                    on:click=on_toggle
                    aria-label=move || if collapsed() { "Expand sidebar" } else { "Collapse sidebar" }
                >
                    {move || if collapsed() { "›" } else { "‹" }}
                </button>
            </div>
            <Show when=move || ui.get().ready>
                <nav class="sidebar__nav">
                    <ul class="sidebar__list">
                        {move || {
                            let current = pathname.get();
                            sidebar_items(gate.state())
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a class=sidebar_link_class(item, &current) href=item.path title=item.label>
                                                <span class="sidebar__initial">{initial(item.label)}</span>
                                                <Show when=move || !collapsed()>
                                                    <span class="sidebar__label">{item.label}</span>
                                                </Show>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </nav>
            </Show>
        </aside>
    }
}

/// Single-letter marker shown when the panel is collapsed.
fn initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

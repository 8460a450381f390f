//! Route guard that renders its children only for permitted roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are a UX layer over the static route table; there is no server
//! enforcement behind them. The decision waits for the splash to finish so
//! server rendering never issues a redirect based on a session it cannot see.

#[cfg(test)]
#[path = "role_gate_test.rs"]
mod role_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthGate;
use crate::state::ui::UiState;
use crate::util::auth::{RouteDecision, decide};

/// Wraps a page; decides from the current location on every navigation and
/// every auth change.
#[component]
pub fn RoleGate(children: ChildrenFn) -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let decision = Memo::new(move |_| decide(gate.state(), &pathname.get()));
    let allowed = move || ui.get().ready && decision.get() == RouteDecision::Render;

    view! {
        <Show
            when=allowed
            fallback=move || {
                ui.get()
                    .ready
                    .then(|| view! { <Redirect path=redirect_target(decision.get()) options=replace()/> })
            }
        >
            {children()}
        </Show>
    }
}

/// Forwards `/` to the home route of the current role.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().ready>
            {move || view! { <Redirect path=redirect_target(decide(gate.state(), "/")) options=replace()/> }}
        </Show>
    }
}

fn redirect_target(decision: RouteDecision) -> &'static str {
    match decision {
        RouteDecision::Redirect(path) => path,
        // A routed page missing from the table is treated as forbidden.
        RouteDecision::Render | RouteDecision::NotFound => LOGIN_PATH,
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

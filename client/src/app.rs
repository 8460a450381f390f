//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navbar::Navbar;
use crate::components::page_frame::PageFrame;
use crate::components::preloader::{Preloader, schedule_ready};
use crate::components::role_gate::{RoleGate, RootRedirect};
use crate::components::sidebar::Sidebar;
use crate::pages::citizen::{CitizenAlerts, CitizenDashboard, CitizenSustainability, CitizenUsage};
use crate::pages::government::{
    GovernmentAlerts, GovernmentAnalytics, GovernmentDashboard, GovernmentResource, GovernmentSustainability,
    SmartSurveillance,
};
use crate::pages::login::LoginPage;
use crate::routes::page_title;
use crate::state::auth::AuthGate;
use crate::state::ui::UiState;
use crate::util::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth gate (restoring any stored session), provides shared
/// state, and starts the splash timer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gate = AuthGate::new(SessionStore::browser());
    let ui = RwSignal::new(UiState::default());

    provide_context(gate);
    provide_context(ui);

    schedule_ready(move || ui.update(|u| u.ready = true));

    view! {
        <Stylesheet id="leptos" href="/pkg/smartcity.css"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Dashboard chrome around the routed page.
#[component]
fn Shell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    view! {
        <Title text=move || page_title(&pathname.get())/>
        <Show when=move || !ui.get().ready>
            <Preloader/>
        </Show>
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="app-shell__content">
                    <Routes fallback=|| {
                        view! {
                            <PageFrame title="Page not found">
                                <p>"There is nothing at this address."</p>
                            </PageFrame>
                        }
                    }>
                        <Route path=StaticSegment("") view=RootRedirect/>
                        <Route path=StaticSegment("login") view=LoginPage/>

                        <Route
                            path=StaticSegment("citizen")
                            view=|| view! { <RoleGate><CitizenDashboard/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("citizen"), StaticSegment("usage"), ParamSegment("resource"))
                            view=|| view! { <RoleGate><CitizenUsage/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("citizen"), StaticSegment("alerts"))
                            view=|| view! { <RoleGate><CitizenAlerts/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("citizen"), StaticSegment("sustainability"))
                            view=|| view! { <RoleGate><CitizenSustainability/></RoleGate> }
                        />

                        <Route
                            path=StaticSegment("government")
                            view=|| view! { <RoleGate><GovernmentDashboard/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("government"), StaticSegment("resource"), ParamSegment("resource"))
                            view=|| view! { <RoleGate><GovernmentResource/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("government"), StaticSegment("analytics"))
                            view=|| view! { <RoleGate><GovernmentAnalytics/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("government"), StaticSegment("sustainability"))
                            view=|| view! { <RoleGate><GovernmentSustainability/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("government"), StaticSegment("alerts"))
                            view=|| view! { <RoleGate><GovernmentAlerts/></RoleGate> }
                        />
                        <Route
                            path=(StaticSegment("government"), StaticSegment("smart-surveillance"))
                            view=|| view! { <RoleGate><SmartSurveillance/></RoleGate> }
                        />
                    </Routes>
                </main>
            </div>
        </div>
    }
}

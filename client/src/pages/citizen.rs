//! Citizen-facing pages.

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::pages::resource_param;

#[component]
pub fn CitizenDashboard() -> impl IntoView {
    view! {
        <PageFrame title="Citizen Dashboard">
            <p>"Household electricity, water and waste at a glance."</p>
        </PageFrame>
    }
}

/// `/citizen/usage/:resource`.
#[component]
pub fn CitizenUsage() -> impl IntoView {
    let resource = resource_param();
    let title = move || resource().map_or_else(|| "Invalid resource".to_owned(), |r| format!("{} Usage", r.label()));

    view! {
        <PageFrame title=title>
            <Show when=move || resource().is_some()>
                <p>{move || resource().map(|r| format!("Your {} consumption and forecast.", r.as_str()))}</p>
            </Show>
        </PageFrame>
    }
}

#[component]
pub fn CitizenAlerts() -> impl IntoView {
    view! {
        <PageFrame title="Alerts and Notifications">
            <p>"Service notices for your neighbourhood."</p>
        </PageFrame>
    }
}

#[component]
pub fn CitizenSustainability() -> impl IntoView {
    view! {
        <PageFrame title="Sustainability Metrics">
            <p>"Carbon footprint, green points and recycling progress."</p>
        </PageFrame>
    }
}

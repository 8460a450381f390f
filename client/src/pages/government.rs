//! Government-facing pages.

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::pages::resource_param;

#[component]
pub fn GovernmentDashboard() -> impl IntoView {
    view! {
        <PageFrame title="Government Dashboard">
            <p>"City-wide resource, traffic and air-quality overview."</p>
        </PageFrame>
    }
}

/// `/government/resource/:resource`.
#[component]
pub fn GovernmentResource() -> impl IntoView {
    let resource = resource_param();
    let title =
        move || resource().map_or_else(|| "Invalid resource".to_owned(), |r| format!("{} Management", r.label()));

    view! {
        <PageFrame title=title>
            <Show when=move || resource().is_some()>
                <p>{move || resource().map(|r| format!("Hourly {} usage across districts.", r.as_str()))}</p>
            </Show>
        </PageFrame>
    }
}

#[component]
pub fn GovernmentAnalytics() -> impl IntoView {
    view! {
        <PageFrame title="Predictive Analytics">
            <p>"Demand forecasts and anomaly reports."</p>
        </PageFrame>
    }
}

#[component]
pub fn GovernmentSustainability() -> impl IntoView {
    view! {
        <PageFrame title="Sustainability Metrics">
            <p>"Emissions, renewable share and recycling rates."</p>
        </PageFrame>
    }
}

#[component]
pub fn GovernmentAlerts() -> impl IntoView {
    view! {
        <PageFrame title="Alerts and Notifications">
            <p>"Incidents and maintenance notices across the city."</p>
        </PageFrame>
    }
}

#[component]
pub fn SmartSurveillance() -> impl IntoView {
    view! {
        <PageFrame title="Smart Surveillance">
            <p>"Camera coverage and incident detection summary."</p>
        </PageFrame>
    }
}

//! Shared page layout: heading plus a content area.

use leptos::prelude::*;

#[component]
pub fn PageFrame(#[prop(into)] title: TextProp, children: Children) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{move || title.get().to_string()}</h1>
            <div class="page__body">{children()}</div>
        </section>
    }
}

//! Login page with a static credential check.
//!
//! TRADE-OFFS
//! ==========
//! The credential table is a client-side stand-in for a real identity
//! service. It decides nothing about access; it only feeds
//! `AuthGate::login` with the chosen role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthGate, Role};

const DEMO_PASSWORD: &str = "password123";

/// Accepted `(role, username, password)` triples.
const ACCOUNTS: [(Role, &str, &str); 2] =
    [(Role::Citizen, "citizen", DEMO_PASSWORD), (Role::Government, "government", DEMO_PASSWORD)];

/// Why a login attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter a username and password.")]
    MissingFields,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

/// Check a login form submission for the selected user type.
///
/// # Errors
///
/// `MissingFields` when either input is empty, `InvalidCredentials` when the
/// pair does not match the account of the selected role.
pub fn check_credentials(username: &str, password: &str, role: Role) -> Result<Role, LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    ACCOUNTS
        .iter()
        .find(|(r, u, p)| *r == role && *u == username && *p == password)
        .map(|(r, _, _)| *r)
        .ok_or(LoginError::InvalidCredentials)
}

fn user_type_class(selected: Role, option: Role) -> &'static str {
    if selected == option { "btn login-type login-type--active" } else { "btn login-type" }
}

/// Blocking browser alert for a failed attempt.
fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gate = expect_context::<AuthGate>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(Role::Citizen);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        match check_credentials(&name, &password.get(), user_type.get()) {
            Ok(role) => {
                info.set(String::new());
                gate.login(&name, role);
                navigate(role.home_path(), NavigateOptions::default());
            }
            Err(err) => {
                let message = err.to_string();
                notify(&message);
                info.set(message);
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Smart City Platform"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Enter your username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="login-label">"User Type"</span>
                    <div class="login-types">
                        <button
                            type="button"
                            class=move || user_type_class(user_type.get(), Role::Citizen)
                            on:click=move |_| user_type.set(Role::Citizen)
                        >
                            "Citizen"
                        </button>
                        <button
                            type="button"
                            class=move || user_type_class(user_type.get(), Role::Government)
                            on:click=move |_| user_type.set(Role::Government)
                        >
                            "Government"
                        </button>
                    </div>
                    <button class="btn login-button" type="submit">
                        "Log In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-hint">
                    <p class="login-hint__title">"For testing:"</p>
                    <p>"Citizen - Username: citizen, Password: password123"</p>
                    <p>"Government - Username: government, Password: password123"</p>
                </div>
            </div>
        </div>
    }
}

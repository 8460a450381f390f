//! Full-screen splash shown until the shell is ready.

use leptos::prelude::*;

/// Delay before the shell replaces the splash in the browser.
pub const SPLASH_DELAY_MS: u64 = 3000;

#[component]
pub fn Preloader() -> impl IntoView {
    view! {
        <div class="preloader" role="status">
            <div class="preloader__mark" aria-hidden="true"></div>
            <h1 class="preloader__title">"Loading Smart City Platform"</h1>
            <div class="preloader__bar"></div>
        </div>
    }
}

/// Flip `ready` once the splash delay has elapsed. One shot, browser only.
pub fn schedule_ready(ready: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SPLASH_DELAY_MS)).await;
            ready();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ready;
    }
}

//! Local UI chrome state (splash, side panel, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so the shell can
//! evolve independently of the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Viewport width below which the side panel collapses on its own.
pub const SIDEBAR_COLLAPSE_BELOW_PX: f64 = 768.0;

/// UI state for the dashboard shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Set once the splash delay has elapsed in the browser. Nothing that
    /// depends on the session renders before this, so server and browser
    /// markup agree during hydration.
    pub ready: bool,
    pub sidebar_collapsed: bool,
    pub menu_open: bool,
}

impl UiState {
    /// Apply the responsive rule for a viewport `width` in CSS pixels.
    pub fn fit_to_width(&mut self, width: f64) {
        self.sidebar_collapsed = should_collapse_sidebar(width);
    }
}

#[must_use]
pub fn should_collapse_sidebar(width: f64) -> bool {
    width < SIDEBAR_COLLAPSE_BELOW_PX
}

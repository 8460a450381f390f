//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and route guards while reading
//! shared state from Leptos context providers.

pub mod navbar;
pub mod page_frame;
pub mod preloader;
pub mod role_gate;
pub mod sidebar;

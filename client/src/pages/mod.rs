//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates layout to
//! `components`. Access control is applied around pages by `RoleGate`, never
//! inside them.

pub mod citizen;
pub mod government;
pub mod login;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::Resource;

/// Reactive `:resource` segment of the current route.
pub(crate) fn resource_param() -> impl Fn() -> Option<Resource> + Copy + Send + Sync + 'static {
    let params = use_params_map();
    move || params.with(|p| p.get("resource")).as_deref().and_then(Resource::parse)
}

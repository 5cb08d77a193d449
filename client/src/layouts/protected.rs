//! Shell for the member area: the shared site chrome, excluded from search
//! indexing.

use leptos::prelude::*;
use leptos_meta::Meta;
use leptos_router::components::Outlet;

use super::public::SiteChrome;

/// Robots directive applied to every route under this shell.
pub const PROTECTED_ROBOTS: &str = "noindex, nofollow";

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    view! {
        <Meta name="robots" content=PROTECTED_ROBOTS/>
        <SiteChrome main_label="Main content">
            <Outlet/>
        </SiteChrome>
    }
}

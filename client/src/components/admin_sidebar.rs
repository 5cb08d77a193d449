//! Admin area navigation.

use leptos::prelude::*;

#[component]
pub fn AdminSidebar() -> impl IntoView {
    view! {
        <aside class="admin-sidebar">
            <nav class="admin-sidebar__nav" aria-label="Admin">
                <a href="/admin">"Dashboard"</a>
                <a href="/admin/episodes/new">"New episode"</a>
                <span class="admin-sidebar__divider" aria-hidden="true"></span>
                <a href="/">"Back to site"</a>
            </nav>
        </aside>
    }
}

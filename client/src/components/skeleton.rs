//! Loading placeholders shown while a page's data is in flight.
//!
//! These render nothing but structure; they never touch context or data.

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

use leptos::prelude::*;

/// Grid cells in the main-area skeleton.
pub const MAIN_SKELETON_CELLS: usize = 12;

/// Stat cards in the admin skeleton (plus one panel).
pub const ADMIN_SKELETON_STATS: usize = 4;

/// Card grid placeholder for browsing pages.
#[component]
pub fn MainSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-grid" aria-busy="true" aria-label="Loading">
            {(0..MAIN_SKELETON_CELLS)
                .map(|_| view! { <div class="skeleton-grid__cell"></div> })
                .collect_view()}
        </div>
    }
}

/// Dashboard placeholder: a row of stat cards above one large panel.
#[component]
pub fn AdminSkeleton() -> impl IntoView {
    view! {
        <div class="admin-skeleton" aria-busy="true" aria-label="Loading">
            <div class="admin-skeleton__stats">
                {(0..ADMIN_SKELETON_STATS)
                    .map(|_| view! { <div class="admin-skeleton__stat"></div> })
                    .collect_view()}
            </div>
            <div class="admin-skeleton__panel"></div>
        </div>
    }
}

//! Admin landing page: catalog counts and the series index.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::skeleton::AdminSkeleton;
use crate::net::catalog::{catalog_stats, list_series, or_empty};
use crate::net::types::CatalogStats;

/// Labelled stat cards, in display order.
pub(crate) fn stat_cards(stats: CatalogStats) -> [(&'static str, u64); 4] {
    [
        ("Series", stats.series),
        ("Episodes", stats.episodes),
        ("Playlists", stats.playlists),
        ("Members", stats.profiles),
    ]
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = Resource::new(|| (), |()| async move { catalog_stats().await.unwrap_or_default() });
    let series = Resource::new(|| (), |()| async move { or_empty(list_series().await) });

    view! {
        <Title text="Admin"/>
        <section class="admin-page">
            <h1 class="admin-page__title">"Dashboard"</h1>
            <Suspense fallback=|| view! { <AdminSkeleton/> }>
                {move || {
                    stats
                        .get()
                        .zip(series.get())
                        .map(|(stats, series)| {
                            view! {
                                <div class="admin-stats">
                                    {stat_cards(stats)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="admin-stats__card">
                                                    <span class="admin-stats__value">{value}</span>
                                                    <span class="admin-stats__label">{label}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <section class="admin-panel">
                                    <h2>"Series"</h2>
                                    <ul class="admin-panel__list">
                                        {series
                                            .into_iter()
                                            .map(|s| view! { <li>{s.title}</li> })
                                            .collect_view()}
                                    </ul>
                                </section>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

//! Admin page for adding an episode to an existing series.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted with `SsrMode::Async`, so the series query resolves on the server
//! before any byte of the response is sent. The response is marked
//! `no-store`: every request reflects the freshest catalog.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::episode_form::EpisodeForm;
use crate::components::skeleton::AdminSkeleton;
use crate::net::catalog::{list_series, or_empty};

#[component]
pub fn NewEpisodePage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    mark_uncacheable();

    let series = Resource::new(|| (), |()| async move { or_empty(list_series().await) });

    view! {
        <Title text="New episode"/>
        <section class="admin-page">
            <h1 class="admin-page__title">"New episode"</h1>
            <Suspense fallback=|| view! { <AdminSkeleton/> }>
                {move || series.get().map(|options| view! { <EpisodeForm series=options/> })}
            </Suspense>
        </section>
    }
}

#[cfg(feature = "ssr")]
fn mark_uncacheable() {
    use axum::http::{HeaderValue, header};
    use leptos_axum::ResponseOptions;

    if let Some(response) = use_context::<ResponseOptions>() {
        response.insert_header(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
}

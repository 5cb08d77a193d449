//! Landing grid of every series.

use leptos::prelude::*;

use crate::components::skeleton::MainSkeleton;
use crate::net::catalog::{list_series, or_empty};

#[component]
pub fn HomePage() -> impl IntoView {
    let series = Resource::new(|| (), |()| async move { or_empty(list_series().await) });

    view! {
        <section class="browse">
            <h1 class="browse__title">"Series"</h1>
            <Suspense fallback=|| view! { <MainSkeleton/> }>
                {move || {
                    series
                        .get()
                        .map(|rows| {
                            if rows.is_empty() {
                                view! { <p class="browse__empty">"No series yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="card-grid">
                                        {rows
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <li class="card-grid__item" data-series-id=s.id>
                                                        <span class="card-grid__title">{s.title}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

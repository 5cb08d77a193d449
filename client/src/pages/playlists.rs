//! Public playlist listing.

use leptos::prelude::*;

use crate::components::remote_image::RemoteImage;
use crate::components::skeleton::MainSkeleton;
use crate::net::catalog::{list_playlists, or_empty};

#[component]
pub fn PlaylistsPage() -> impl IntoView {
    let playlists = Resource::new(|| (), |()| async move { or_empty(list_playlists().await) });

    view! {
        <section class="browse">
            <h1 class="browse__title">"Playlists"</h1>
            <Suspense fallback=|| view! { <MainSkeleton/> }>
                {move || {
                    playlists
                        .get()
                        .map(|rows| {
                            if rows.is_empty() {
                                view! { <p class="browse__empty">"No playlists yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="card-grid">
                                        {rows
                                            .into_iter()
                                            .map(|p| {
                                                let alt = p.title.clone();
                                                view! {
                                                    <li class="card-grid__item">
                                                        <RemoteImage src=p.cover_url alt=alt class="card-grid__cover"/>
                                                        <span class="card-grid__title">{p.title}</span>
                                                        {p
                                                            .description
                                                            .map(|d| view! { <p class="card-grid__meta">{d}</p> })}
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

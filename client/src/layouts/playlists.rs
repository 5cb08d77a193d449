//! Public playlists area with fixed SEO metadata.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::Outlet;

use super::public::SiteChrome;

pub const PLAYLISTS_TITLE: &str = "Playlists";
pub const PLAYLISTS_DESCRIPTION: &str = "Browse curated playlists of episodes and series.";

#[component]
pub fn PlaylistsLayout() -> impl IntoView {
    view! {
        <Title text=PLAYLISTS_TITLE/>
        <Meta name="description" content=PLAYLISTS_DESCRIPTION/>
        <SiteChrome main_label="Playlists">
            <Outlet/>
        </SiteChrome>
    }
}

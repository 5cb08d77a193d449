//! Indexable site chrome shared by the public and member areas.

#[cfg(test)]
#[path = "public_test.rs"]
mod public_test;

use leptos::prelude::*;
use leptos_meta::Meta;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::header::Header;

pub const SITE_DESCRIPTION: &str = "Stream the latest episodes and browse every series.";

/// Header, labelled main landmark, footer. Emits no robots directive.
#[component]
pub fn SiteChrome(#[prop(into)] main_label: String, children: Children) -> impl IntoView {
    view! {
        <div class="site-shell">
            <Header/>
            <main class="site-shell__main" aria-label=main_label>
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

/// Landing area at `/`.
#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <Meta name="description" content=SITE_DESCRIPTION/>
        <SiteChrome main_label="Main content">
            <Outlet/>
        </SiteChrome>
    }
}

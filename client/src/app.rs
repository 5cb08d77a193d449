//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::toast_provider::ToastProvider;
use crate::layouts::{
    admin::AdminLayout, playlists::PlaylistsLayout, protected::ProtectedLayout, public::PublicLayout,
};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, home::HomePage, new_episode::NewEpisodePage, not_found::NotFoundPage,
    playlists::PlaylistsPage, profile::ProfilePage,
};
use crate::state::auth::AuthProvider;

/// Brand shown in the header, footer, and document titles.
pub const SITE_NAME: &str = "HentaiClick";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn page_title(text: String) -> String {
    if text.is_empty() { SITE_NAME.to_owned() } else { format!("{text} | {SITE_NAME}") }
}

/// Root application component.
///
/// Installs the toast and auth contexts once for the whole tree, then routes
/// into the layout shells.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/episodes.css"/>
        <Title formatter=page_title/>

        <ToastProvider>
            <AuthProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <ParentRoute path=StaticSegment("") view=PublicLayout>
                            <Route path=StaticSegment("") view=HomePage/>
                        </ParentRoute>
                        <ParentRoute path=StaticSegment("profile") view=ProtectedLayout>
                            <Route path=StaticSegment("") view=ProfilePage/>
                        </ParentRoute>
                        <ParentRoute path=StaticSegment("playlists") view=PlaylistsLayout>
                            <Route path=StaticSegment("") view=PlaylistsPage/>
                        </ParentRoute>
                        <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                            <Route path=StaticSegment("") view=AdminDashboardPage/>
                            <Route
                                path=(StaticSegment("episodes"), StaticSegment("new"))
                                view=NewEpisodePage
                                ssr=SsrMode::Async
                            />
                        </ParentRoute>
                    </Routes>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}

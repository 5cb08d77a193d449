use leptos::prelude::*;

use crate::app::SITE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__nav" aria-label="Footer">
                <a href="/">"Browse"</a>
                <a href="/playlists">"Playlists"</a>
            </nav>
            <p class="site-footer__copy">{SITE_NAME}</p>
        </footer>
    }
}

//! Site header with primary navigation and the session widget.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::app::SITE_NAME;
use crate::state::auth::{AuthContext, use_auth};
#[cfg(feature = "hydrate")]
use crate::state::toast::use_toaster;

/// A sign-out click only does work while someone is signed in.
pub(crate) fn sign_out_available(auth: AuthContext) -> bool {
    auth.snapshot_untracked().user.is_some()
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    #[cfg(feature = "hydrate")]
    let toaster = use_toaster();

    let on_sign_out = move |_| {
        if !sign_out_available(auth) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            auth.sign_out().await;
            toaster.info("Signed out.");
        });
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                {SITE_NAME}
            </a>
            <nav class="site-header__nav" aria-label="Primary">
                <a href="/">"Browse"</a>
                <a href="/playlists">"Playlists"</a>
                <Show when=move || auth.snapshot().is_admin()>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <div class="site-header__session">
                {move || {
                    let state = auth.snapshot();
                    if state.loading {
                        view! { <span class="site-header__pending" aria-hidden="true"></span> }.into_any()
                    } else if let Some(user) = state.user {
                        view! {
                            <a class="site-header__user" href="/profile">
                                {user.display_name().to_owned()}
                            </a>
                            <button class="btn" on:click=on_sign_out>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! { <span class="site-header__guest">"Guest"</span> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}

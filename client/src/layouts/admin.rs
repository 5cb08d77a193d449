//! Admin shell: sidebar navigation and a padded main region.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity resolves in the browser, so SSR and the first hydrated frame see
//! `Pending` and render the nested page (its own data fetch must still run on
//! the server). Once identity is known, non-admins get an access notice in
//! place of the page. Writes are authorized upstream against the caller's own
//! token, so this gate controls presentation only.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_meta::Meta;
use leptos_router::components::Outlet;

use crate::components::admin_sidebar::AdminSidebar;
use crate::state::auth::{AuthState, use_auth};

/// What the admin shell should render for a given auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminGate {
    Pending,
    Denied,
    Granted,
}

impl AdminGate {
    #[must_use]
    pub fn for_state(state: &AuthState) -> Self {
        if state.loading {
            Self::Pending
        } else if state.is_admin() {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = use_auth();
    let gate = Memo::new(move |_| AdminGate::for_state(&auth.snapshot()));

    view! {
        <Meta name="robots" content="noindex, nofollow"/>
        <div class="admin-shell">
            <AdminSidebar/>
            <main class="admin-shell__main">
                <Show
                    when=move || gate.get() != AdminGate::Denied
                    fallback=|| {
                        view! {
                            <section class="admin-shell__denied">
                                <h1>"Admins only"</h1>
                                <p>"Your account does not have access to this area."</p>
                                <a href="/">"Return home"</a>
                            </section>
                        }
                    }
                >
                    <Outlet/>
                </Show>
            </main>
        </div>
    }
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is the single writer: it resolves identity once per session
//! after hydration. Layouts and pages read snapshots through [`use_auth`].
//! `loading` means "identity not yet determined", never "guest".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::Profile;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Profile>,
    /// True only until the first identity resolution.
    pub loading: bool,
    /// Set when identity resolution failed, as opposed to "signed out".
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    /// Record the outcome of a successful identity lookup (`None` = signed out).
    pub fn resolve(&mut self, user: Option<Profile>) {
        self.user = user;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed identity lookup.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.user = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn sign_out(&mut self) {
        self.resolve(None);
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Profile::is_admin)
    }
}

/// Read handle over the session's auth state plus the sign-out action.
///
/// `AuthContext::default()` is the value seen outside an [`AuthProvider`]:
/// it always reports the default (loading) state and its sign-out is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthContext {
    state: Option<RwSignal<AuthState>>,
}

impl AuthContext {
    #[must_use]
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state: Some(state) }
    }

    /// Current state; tracked when called inside a reactive scope.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.map(|s| s.get()).unwrap_or_default()
    }

    #[must_use]
    pub fn snapshot_untracked(&self) -> AuthState {
        self.state.map(|s| s.get_untracked()).unwrap_or_default()
    }

    /// End the session upstream, then clear the local user.
    pub async fn sign_out(self) {
        let Some(state) = self.state else {
            return;
        };
        crate::net::api::sign_out().await;
        state.update(AuthState::sign_out);
    }
}

/// The provided auth context, or the unprovided default.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}

/// Installs the session's auth context and resolves identity after hydration.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());
    provide_context(AuthContext::new(state));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Ok(user) => state.update(|s| s.resolve(user)),
            Err(e) => {
                log::warn!("identity resolution failed: {e}");
                state.update(|s| s.fail(e));
            }
        }
    });

    children()
}

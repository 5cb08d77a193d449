//! REST helpers for the auth proxy endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since identity is resolved in the browser after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from `/api/auth/me` is a valid "signed out" answer, not an error.
//! Anything else that fails is returned as `Err` so the auth context can show
//! a distinct failure state instead of pretending the user is a guest.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Profile;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// How a `/api/auth/me` status code should be interpreted.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MeOutcome {
    SignedIn,
    SignedOut,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_me_status(status: u16) -> MeOutcome {
    match status {
        200..=299 => MeOutcome::SignedIn,
        401 | 403 => MeOutcome::SignedOut,
        _ => MeOutcome::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn identity_failed_message(status: u16) -> String {
    format!("identity lookup failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error string when the lookup fails for any reason other than
/// the user being signed out.
pub async fn fetch_current_user() -> Result<Option<Profile>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match classify_me_status(resp.status()) {
            MeOutcome::SignedIn => resp.json::<Profile>().await.map(Some).map_err(|e| e.to_string()),
            MeOutcome::SignedOut => Ok(None),
            MeOutcome::Failed => Err(identity_failed_message(resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Sign out by calling `POST /api/auth/logout`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

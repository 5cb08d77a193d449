//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and its
//! catalog handle is provided to Leptos rendering and server functions through
//! context. Both backend seams are trait objects so tests swap in mocks.

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

use std::sync::Arc;

use episodes_ui::net::catalog::SharedCatalog;

use crate::config::ServerConfig;
use crate::services::catalog::{SupabaseCatalog, UnconfiguredCatalog};
use crate::services::http;
use crate::services::identity::{SharedIdentity, SupabaseIdentity, UnconfiguredIdentity};

/// Clone is required by Axum; every field is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: SharedCatalog,
    pub identity: SharedIdentity,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, catalog: SharedCatalog, identity: SharedIdentity) -> Self {
        Self { config: Arc::new(config), catalog, identity }
    }

    /// Wire the backend clients described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the outbound HTTP client cannot be built.
    pub fn from_config(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let (catalog, identity): (SharedCatalog, SharedIdentity) = match &config.supabase {
            Some(supabase) => {
                let client = http::build_client(config.timeouts)?;
                (
                    Arc::new(SupabaseCatalog::new(client.clone(), supabase)),
                    Arc::new(SupabaseIdentity::new(client, supabase)),
                )
            }
            None => {
                tracing::warn!("SUPABASE_URL not configured; catalog disabled and all visitors are guests");
                (Arc::new(UnconfiguredCatalog), Arc::new(UnconfiguredIdentity))
            }
        };
        Ok(Self::new(config, catalog, identity))
    }
}

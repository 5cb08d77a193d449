//! Clients for the external backend-as-a-service.
//!
//! ARCHITECTURE
//! ============
//! `catalog` implements the UI crate's `CatalogSource` over the REST data API,
//! `identity` resolves and revokes user tokens against the auth API. Both
//! share one `reqwest` client built by `http`.

pub mod catalog;
pub mod http;
pub mod identity;

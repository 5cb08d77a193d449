//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the auth proxy REST calls, `catalog` exposes the catalog as
//! server functions, and `types` defines the shared wire schema.

pub mod api;
pub mod catalog;
pub mod types;

//! Nested route shells.
//!
//! ARCHITECTURE
//! ============
//! Each layout supplies structural chrome and route metadata around an
//! `Outlet`; leaf pages own their own data fetching.

pub mod admin;
pub mod playlists;
pub mod protected;
pub mod public;

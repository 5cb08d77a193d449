//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped data fetching and delegates rendering
//! details to `components`.

pub mod admin_dashboard;
pub mod home;
pub mod new_episode;
pub mod not_found;
pub mod playlists;
pub mod profile;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, placeholders, and forms while reading
//! shared state from Leptos context providers.

pub mod admin_sidebar;
pub mod episode_form;
pub mod footer;
pub mod header;
pub mod remote_image;
pub mod skeleton;
pub mod toast_provider;

//! Crawler-facing documents: robots policy and sitemap.
//!
//! Both are pure functions of the public base URL so the route handlers stay
//! trivial and the output is deterministic.

pub mod robots;
pub mod sitemap;

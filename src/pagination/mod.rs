//! Offset/limit pagination
//!
//! The remote API exposes several collections (team maintainers, team roles,
//! members, environments) only through listing endpoints that return at most
//! `limit` items per request. [`PaginatedCollector`] turns such an endpoint
//! into a single complete, order-stable `Vec`.

mod collector;
mod models;

pub use collector::PaginatedCollector;
pub use models::{Link, Page, PageLimit, PageRequest};

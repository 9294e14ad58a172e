//! LaunchDarkly API client module
//!
//! This module provides the transport and the collection endpoints that are
//! paged through [`crate::pagination::PaginatedCollector`].

mod client;
mod credentials;
mod host;
pub mod members;
pub mod projects;
pub mod teams;

pub use client::{ClientOptions, LdClient};
pub use credentials::{Credential, TokenResolver};
pub use host::HostResolver;
pub use members::Member;
pub use projects::Environment;
pub use teams::{MemberSummary, TeamCustomRole};

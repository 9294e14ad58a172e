//! ldctl - exhaustive listing of paginated LaunchDarkly collections
//!
//! The LaunchDarkly REST API returns collections in offset/limit pages.
//! [`PaginatedCollector`] walks every page of a collection and returns the
//! complete list, or the first error encountered.
//!
//! # Example
//!
//! ```bash
//! # List every maintainer of a team
//! ldctl maintainers platform
//!
//! # Custom role keys of a team, as JSON
//! ldctl roles platform --keys-only --format json
//!
//! # Environments of a project, 20 per page
//! ldctl environments default --page-limit 20
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ld;
pub mod output;
pub mod pagination;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{LdError, Result};
pub use ld::{
    ClientOptions, Credential, Environment, HostResolver, LdClient, Member, MemberSummary,
    TeamCustomRole, TokenResolver,
};
pub use output::{
    output_environments, output_maintainers, output_members, output_role_keys, output_roles,
};
pub use pagination::{Link, Page, PageLimit, PageRequest, PaginatedCollector};

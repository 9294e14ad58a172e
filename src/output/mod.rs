//! Output formatters for listed collections

mod common;
mod environments;
mod members;
mod roles;

pub use common::Tabular;
pub use environments::output_environments;
pub use members::{output_maintainers, output_members};
pub use roles::{output_role_keys, output_roles};

//! Teams module - maintainers and custom roles of a team

mod api;
mod models;

pub use models::{MemberSummary, TeamCustomRole};

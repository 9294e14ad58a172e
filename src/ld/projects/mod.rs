//! Projects module - environments of a project

mod api;
mod models;

pub use models::Environment;

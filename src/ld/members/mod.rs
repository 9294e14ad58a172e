//! Members module - account members, optionally scoped to a team or email

mod api;
mod models;

pub use models::Member;

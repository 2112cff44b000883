pub mod auth;
pub mod recordings;

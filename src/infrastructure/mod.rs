pub mod github;
pub mod session;

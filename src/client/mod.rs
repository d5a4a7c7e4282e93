pub mod api;
pub mod auth;
pub mod session;

pub use api::{ApiClient, DEFAULT_ENDPOINT};

pub mod error;
pub mod media_server;
pub mod models;

pub use error::ApiError;
pub use media_server::{MediaBackend, MediaServerClient};
pub use models::*;

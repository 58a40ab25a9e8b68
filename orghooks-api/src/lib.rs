pub mod error;
pub use error::ApiError;

pub mod host;

#[cfg(feature = "client")]
pub mod client;

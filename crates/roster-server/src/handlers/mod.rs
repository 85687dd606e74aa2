//! HTTP handlers

pub mod error;
pub mod health;
pub mod records;
pub mod users;

pub use error::ApiError;
pub use health::health;

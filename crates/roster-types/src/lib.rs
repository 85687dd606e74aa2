//! Roster Types - Pure type definitions
//!
//! Value types shared by the stores and the HTTP boundary. No async runtime
//! or storage dependencies live here.

pub mod api;
pub mod record;
pub mod user;

pub use api::*;
pub use record::*;
pub use user::*;

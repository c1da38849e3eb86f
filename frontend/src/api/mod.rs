mod auth;
pub mod client;
mod error;
pub mod query;
pub mod service;
pub mod types;

pub use client::*;
pub use error::*;
pub use query::*;
pub use service::*;
pub use types::*;

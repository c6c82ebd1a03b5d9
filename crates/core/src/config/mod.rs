//! Configuration loading and schema definitions
//!
//! Shared configuration for the search tools.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;

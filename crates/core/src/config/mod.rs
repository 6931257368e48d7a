//! Configuration loading and schema definitions
//!
//! The typed document contract consumed by the Weft build tool.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;

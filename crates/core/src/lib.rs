//! Core configuration layer for the Weft CSS framework
//!
//! This crate defines the declarative contract between a project and
//! the Weft build tool:
//!
//! - **Schema**: the typed [`config::ConfigDocument`] with content
//!   globs, dark-mode strategy, theme extensions, and plugin order
//! - **Loading**: JSON config file discovery and single-pass shape
//!   validation with defaults applied
//! - **Error handling**: structured errors with codes, the offending
//!   field, and recovery suggestions
//! - **Plugins**: the opaque reference and transform-chain seam the
//!   build tool composes against
//!
//! # Example
//!
//! ```rust,no_run
//! use weft_core::config::Config;
//!
//! let config = Config::load(None).expect("no weft.config.json found");
//! for pattern in &config.document.content {
//!     println!("will scan {}", pattern);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod plugin;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigDocument, DarkMode, PluginRef, Theme};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::plugin::{apply_chain, Plugin, Stylesheet};
}

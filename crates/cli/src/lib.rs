//! CLI utilities for Weft tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Configuration error rendering

#![warn(missing_docs)]

pub mod output;

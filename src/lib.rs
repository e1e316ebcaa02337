//! Confmap Library
//!
//! Flat key=value configuration files for Rust applications.
//!
//! Parses `key = value` text into a [`ConfigMap`], merges override maps
//! on top of base maps, exposes typed accessors over the string values,
//! and exports the result as a JSON object.

pub mod config;
pub mod diag;
pub mod digest;
pub mod version;

pub use config::{apply_overrides, parse_contents, ConfigLoader, ConfigMap};
pub use diag::{DiagnosticSink, MemorySink, StderrSink, TracingSink};
pub use version::Version;

/// Common error type for the library
pub type Result<T> = anyhow::Result<T>;

//! Configuration Loader

use super::{parse_contents, ConfigMap};
use crate::diag::DiagnosticSink;
use crate::digest;
use crate::Result;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Loads configuration files from disk.
///
/// Diagnostics go through the injected sink; `silent` suppresses the
/// raw-content echo on successful loads.
pub struct ConfigLoader {
    sink: Arc<dyn DiagnosticSink>,
    silent: bool,
}

impl ConfigLoader {
    /// Create a loader reporting through the given sink
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            sink,
            silent: false,
        }
    }

    /// Suppress the raw-content echo on successful loads
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Read and parse a config file, returning the content digest and
    /// the parsed map.
    ///
    /// The digest is the hex SHA-256 of the raw bytes, stable per
    /// content, so callers can detect file changes without re-parsing.
    /// Unless silent, the raw contents are echoed to the sink prefixed
    /// with the file path before parsing.
    pub fn parse(&self, path: &Path) -> Result<(String, ConfigMap)> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let digest = digest::sha256_hex(&bytes);

        let contents = String::from_utf8_lossy(&bytes);
        if !self.silent {
            self.sink.log(&format!("{}:\n{}", path.display(), contents));
        }

        let map = parse_contents(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok((digest, map))
    }

    /// Load an optional local config; failures never reach the caller.
    ///
    /// Any read or parse error is reported to the sink (the error, then
    /// the failing path) and an empty map is returned. Local config is
    /// advisory, so a missing or corrupt file must not abort the host
    /// program.
    pub fn parse_local_config(&self, path: &Path) -> ConfigMap {
        match self.parse(path) {
            Ok((_digest, map)) => map,
            Err(e) => {
                tracing::warn!("Optional config not loaded: {:#}", e);
                self.sink.log(&format!("{:#}", e));
                self.sink.log(&format!("{}", path.display()));
                ConfigMap::new()
            }
        }
    }
}

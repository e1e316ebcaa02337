//! Override Merge

use super::ConfigMap;
use crate::diag::DiagnosticSink;

/// Combine a base map with an override map; override entries win on key
/// collision.
///
/// An empty override map is a no-op and emits nothing. Otherwise, unless
/// `silent`, the override entries and the full combined result are
/// reported to the sink as sorted `key = value` blocks. Never fails.
pub fn apply_overrides(
    base: &ConfigMap,
    overrides: &ConfigMap,
    silent: bool,
    sink: &dyn DiagnosticSink,
) -> ConfigMap {
    if overrides.is_empty() {
        return base.clone();
    }

    let mut combined = base.clone();
    for (key, value) in overrides.iter() {
        combined.insert(key.to_string(), value.to_string());
    }

    if !silent {
        sink.log(&format!("Config overrides:\n{}", overrides));
        sink.log(&format!("The combined config:\n{}", combined));
    }

    combined
}

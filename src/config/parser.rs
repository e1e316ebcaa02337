//! Configuration Parser

use super::ConfigMap;
use crate::Result;
use anyhow::bail;

/// Parse flat `key = value` configuration text.
///
/// Input splits into lines on `\n`. A line is skipped when it is blank
/// after trimming, or when its very first character is `#` — leading
/// whitespace before `#` does NOT make a comment; such a line parses as
/// an ordinary key=value line. Every other line splits on its first `=`:
/// key and value are trimmed, any further `=` characters stay verbatim
/// in the value, and later duplicates of a key overwrite earlier ones.
/// A line without `=` maps the trimmed line to the empty string.
pub fn parse_contents(text: &str) -> Result<ConfigMap> {
    let mut map = ConfigMap::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        // Comment only when '#' is the character at index 0
        if line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, '=');
        let first = match parts.next() {
            Some(first) => first,
            // splitn always yields at least one part; guard it anyway
            None => bail!("config line yielded no parts: {:?}", line),
        };
        let (key, value) = match parts.next() {
            Some(rest) => (first.trim(), rest.trim()),
            None => (first.trim(), ""),
        };

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

//! Typed Configuration Getters

use super::ConfigMap;
use crate::version::Version;
use crate::Result;
use anyhow::{bail, Context};
use regex::Regex;
use std::sync::OnceLock;

// Default list delimiter: a comma followed by any run of whitespace.
fn list_delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*").unwrap())
}

/// Typed accessors over the raw string values.
///
/// An absent key is never an error: the `_opt` forms return `None` and
/// the `_with_default` forms return the caller's default. A key that is
/// present with a malformed value IS an error carrying the key and the
/// offending value; getters never coerce bad input into a default.
impl ConfigMap {
    /// Raw string value, if the key is present
    pub fn string_opt(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    /// Raw string value, or the given default when absent
    pub fn string_with_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Base-10 integer value
    pub fn int_opt(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            Some(value) => {
                let parsed = value.parse::<i64>().with_context(|| {
                    format!("invalid integer for key '{}': '{}'", key, value)
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Base-10 integer value, or the default when absent
    pub fn int_with_default(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.int_opt(key)?.unwrap_or(default))
    }

    /// Floating-point value
    pub fn float_opt(&self, key: &str) -> Result<Option<f64>> {
        match self.get(key) {
            Some(value) => {
                let parsed = value.parse::<f64>().with_context(|| {
                    format!("invalid float for key '{}': '{}'", key, value)
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Floating-point value, or the default when absent
    pub fn float_with_default(&self, key: &str, default: f64) -> Result<f64> {
        Ok(self.float_opt(key)?.unwrap_or(default))
    }

    /// Boolean value; only the exact strings `true` and `false` parse
    pub fn bool_opt(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => bail!(
                "invalid boolean for key '{}': '{}' (expected \"true\" or \"false\")",
                key,
                other
            ),
            None => Ok(None),
        }
    }

    /// Boolean value, or the default when absent
    pub fn bool_with_default(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.bool_opt(key)?.unwrap_or(default))
    }

    /// Value split on commas followed by optional whitespace
    pub fn string_list_opt(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)
            .map(|value| list_delimiter().split(value).map(str::to_string).collect())
    }

    /// Value split on a caller-supplied delimiter pattern, or the default
    /// list when the key is absent
    pub fn string_list_with_default(
        &self,
        key: &str,
        delimiter: &Regex,
        default: Vec<String>,
    ) -> Vec<String> {
        match self.get(key) {
            Some(value) => delimiter.split(value).map(str::to_string).collect(),
            None => default,
        }
    }

    /// Boolean gate with version staging.
    ///
    /// A literal `true`/`false` wins outright. Any other value is read as
    /// a minimum version and the gate opens when `current` is at least
    /// that version.
    pub fn bool_if_min_version(
        &self,
        key: &str,
        default: bool,
        current: &Version,
    ) -> Result<bool> {
        let raw = self.string_with_default(key, &default.to_string());
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            spec => {
                let min = Version::parse(spec).with_context(|| {
                    format!("invalid version gate for key '{}': '{}'", key, spec)
                })?;
                Ok(*current >= min)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigMap {
        ConfigMap::of_pairs(vec![
            ("name", "proxy"),
            ("port", "1080"),
            ("ratio", "0.75"),
            ("enabled", "true"),
            ("disabled", "false"),
            ("bad_int", "twelve"),
            ("bad_bool", "True"),
            ("hosts", "a, b,\nc"),
        ])
    }

    #[test]
    fn test_string_getters() {
        let config = sample();
        assert_eq!(config.string_opt("name"), Some("proxy"));
        assert_eq!(config.string_opt("missing"), None);
        assert_eq!(config.string_with_default("name", "other"), "proxy");
        assert_eq!(config.string_with_default("missing", "other"), "other");
    }

    #[test]
    fn test_int_default_vs_malformed() {
        let config = sample();
        assert_eq!(config.int_with_default("port", 5).unwrap(), 1080);
        assert_eq!(config.int_with_default("missing", 5).unwrap(), 5);
        assert_eq!(config.int_opt("missing").unwrap(), None);

        // A present but malformed value must not fall back to the default
        let err = config.int_with_default("bad_int", 5).unwrap_err();
        assert!(err.to_string().contains("bad_int"));
        assert!(err.to_string().contains("twelve"));
    }

    #[test]
    fn test_float_getters() {
        let config = sample();
        assert_eq!(config.float_with_default("ratio", 0.5).unwrap(), 0.75);
        assert_eq!(config.float_with_default("missing", 0.5).unwrap(), 0.5);
        assert!(config.float_opt("name").is_err());
    }

    #[test]
    fn test_bool_is_case_sensitive() {
        let config = sample();
        assert_eq!(config.bool_with_default("enabled", false).unwrap(), true);
        assert_eq!(config.bool_with_default("disabled", true).unwrap(), false);
        assert_eq!(config.bool_with_default("missing", true).unwrap(), true);
        assert!(config.bool_opt("bad_bool").is_err());
    }

    #[test]
    fn test_list_splits_on_comma_whitespace() {
        let config = sample();
        assert_eq!(
            config.string_list_opt("hosts").unwrap(),
            vec!["a", "b", "c"]
        );
        assert_eq!(config.string_list_opt("missing"), None);
    }

    #[test]
    fn test_list_with_custom_delimiter() {
        let config = ConfigMap::of_pairs(vec![("path", "usr:local:bin")]);
        let colon = Regex::new(":").unwrap();
        assert_eq!(
            config.string_list_with_default("path", &colon, vec![]),
            vec!["usr", "local", "bin"]
        );
        assert_eq!(
            config.string_list_with_default("missing", &colon, vec!["fallback".to_string()]),
            vec!["fallback"]
        );
    }

    #[test]
    fn test_version_gate() {
        let current = Version::parse("V10").unwrap();

        let config = ConfigMap::of_pairs(vec![("feature", "V5")]);
        assert!(config.bool_if_min_version("feature", false, &current).unwrap());

        let config = ConfigMap::of_pairs(vec![("feature", "V11")]);
        assert!(!config.bool_if_min_version("feature", false, &current).unwrap());

        // Literal booleans win regardless of version
        let config = ConfigMap::of_pairs(vec![("feature", "false")]);
        assert!(!config.bool_if_min_version("feature", true, &current).unwrap());

        // Absent key falls back to the stringified default
        let config = ConfigMap::new();
        assert!(config.bool_if_min_version("feature", true, &current).unwrap());
        assert!(!config.bool_if_min_version("feature", false, &current).unwrap());

        // Gate equal to the current version is open
        let config = ConfigMap::of_pairs(vec![("feature", "V10")]);
        assert!(config.bool_if_min_version("feature", false, &current).unwrap());

        let config = ConfigMap::of_pairs(vec![("feature", "not-a-version")]);
        assert!(config.bool_if_min_version("feature", false, &current).is_err());
    }
}

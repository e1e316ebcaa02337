//! Version Parsing and Comparison

use crate::Result;
use anyhow::{bail, Context};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Dotted numeric version, optionally prefixed with `v` or `V`.
///
/// Comparison is segment-wise numeric with missing trailing segments
/// treated as zero, so `v1` equals `1.0.0` and `V10` sorts after `V5`.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    /// Parse a version string such as `V5`, `v1.2` or `10.4.1`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
        if digits.is_empty() {
            bail!("empty version string: {:?}", input);
        }

        let segments = digits
            .split('.')
            .map(|part| {
                part.parse::<u64>().with_context(|| {
                    format!("invalid version segment '{}' in '{}'", part, input)
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        Ok(Self { segments })
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.segments.iter().map(u64::to_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

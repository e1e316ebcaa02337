//! Confmap - Flat key=value configuration inspector
//!
//! Loads a flat `key = value` configuration file, applies command-line
//! overrides on top of it, and prints the combined result as JSON or a
//! single queried value. Diagnostics go to stderr so stdout stays clean
//! for program output.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confmap::{apply_overrides, ConfigLoader, ConfigMap, DiagnosticSink, StderrSink};

/// CLI arguments for confmap
#[derive(Parser, Debug)]
#[command(name = "confmap")]
#[command(about = "Inspect flat key=value configuration files")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path
    pub config: PathBuf,

    /// Override entries applied on top of the file (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Print only the value of this key
    #[arg(short, long, value_name = "KEY")]
    pub get: Option<String>,

    /// Suppress the diagnostic echo of file contents and overrides
    #[arg(long)]
    pub silent: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", help = "Log level")]
    pub log_level: String,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_tracing(&args)?;

    let sink: Arc<dyn DiagnosticSink> = Arc::new(StderrSink);
    let loader = ConfigLoader::new(sink.clone()).silent(args.silent);

    // Local config is advisory: a missing or corrupt file yields an
    // empty base map rather than an error.
    let base = loader.parse_local_config(&args.config);
    info!(
        "Loaded {} ({} entries)",
        args.config.display(),
        base.len()
    );

    let overrides = ConfigMap::of_pairs(args.set.iter().map(|entry| split_override(entry)));
    let combined = apply_overrides(&base, &overrides, args.silent, sink.as_ref());

    if let Some(key) = &args.get {
        match combined.string_opt(key) {
            Some(value) => println!("{}", value),
            None => bail!("key '{}' not present in {}", key, args.config.display()),
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&combined.to_json())?);
    }

    Ok(())
}

/// Split a KEY=VALUE override on the first '='; a bare KEY maps to ""
fn split_override(entry: &str) -> (String, String) {
    match entry.split_once('=') {
        Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
        None => (entry.trim().to_string(), String::new()),
    }
}

/// Initialize tracing/logging
fn init_tracing(args: &CliArgs) -> Result<()> {
    let log_level = if args.verbose {
        "debug"
    } else {
        &args.log_level
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_ansi(true),
        )
        .with(env_filter)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_override() {
        assert_eq!(
            split_override("key=value"),
            ("key".to_string(), "value".to_string())
        );
        assert_eq!(
            split_override(" key = a=b "),
            ("key".to_string(), "a=b".to_string())
        );
        assert_eq!(split_override("bare"), ("bare".to_string(), String::new()));
    }
}

//! Logger setup.
//!
//! Log records go through the `log` facade to `env_logger`. `RUST_LOG`
//! takes precedence over the verbosity flag. The terminal UI owns the
//! screen, so in that mode records are written to a file in the temp
//! directory instead of stderr.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// A fresh file under the system temp directory.
    TempFile,
}

/// Maps the number of `-v` flags to a default filter.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds a log file name from a random suffix.
pub fn log_file_name(suffix: u32) -> String {
    format!("dnacipher-{:08x}.log", suffix)
}

/// Installs the global logger.
///
/// Returns the log file path when logging to a file.
pub fn init(verbosity: u8, target: LogTarget) -> Result<Option<PathBuf>> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)));

    let path = match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
            None
        }
        LogTarget::TempFile => {
            let path = std::env::temp_dir().join(log_file_name(rand::random()));
            let file = File::create(&path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
    };

    builder.try_init().context("Logger already initialized")?;
    Ok(path)
}

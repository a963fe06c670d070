//! Runtime settings from flags and environment.
//!
//! # Environment Variables
//!
//! - `DCDM_SCALE` - Default domain-range scale (`reference`, `1`, `100`)
//! - `DCDM_THREADS` - Worker thread count (0 = auto)
//!
//! Command line flags take precedence over the environment.

use std::env;

use anyhow::{Context, Result};
use dcdm_core::Scale;
use tracing::debug;

/// Environment variable holding the default scale.
pub const ENV_SCALE: &str = "DCDM_SCALE";

/// Environment variable holding the worker thread count.
pub const ENV_THREADS: &str = "DCDM_THREADS";

/// Resolved runtime settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub scale: Scale,
    pub threads: usize,
}

impl Settings {
    /// Resolves settings from flags, then the process environment.
    pub fn resolve(scale: Option<&str>, threads: Option<usize>) -> Result<Self> {
        Self::resolve_with(scale, threads, |key| env::var(key).ok())
    }

    /// Resolves settings using `lookup` for environment access.
    pub fn resolve_with(
        scale: Option<&str>,
        threads: Option<usize>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let scale = match scale {
            Some(s) => s.parse::<Scale>().context("Invalid --scale")?,
            None => match lookup(ENV_SCALE) {
                Some(s) => s
                    .parse::<Scale>()
                    .with_context(|| format!("Invalid {}", ENV_SCALE))?,
                None => Scale::default(),
            },
        };

        let threads = match threads {
            Some(n) => n,
            None => match lookup(ENV_THREADS) {
                Some(s) => s
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid {}: '{}'", ENV_THREADS, s))?,
                None => 0,
            },
        };

        let settings = Self { scale, threads };
        debug!(scale = %settings.scale, threads = settings.threads, "Resolved settings");
        Ok(settings)
    }
}

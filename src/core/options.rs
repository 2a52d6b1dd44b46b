use std::path::PathBuf;

use serde::Serialize;

use crate::types::LogLevel;

/// Identifier read when no input is given.
pub const STDIN_SENTINEL: &str = "/dev/stdin";

pub const ENV_ACCESS_KEY: &str = "SE_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "SE_SECRET_KEY";
pub const ENV_HOST_URL: &str = "SE_HOST_URL";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Run configuration, built once from the command line and never mutated.
/// Serialized to JSON for the start-of-run log record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Options {
    pub log_level: LogLevel,
    /// Extra log destination next to stderr
    pub log_file: Option<PathBuf>,
    /// Source identifiers in processing order; empty means stdin
    pub inputs: Vec<String>,
}

impl Options {
    /// The configured inputs, or the stdin sentinel alone when none were given.
    pub fn effective_inputs(&self) -> Vec<&str> {
        if self.inputs.is_empty() {
            vec![STDIN_SENTINEL]
        } else {
            self.inputs.iter().map(String::as_str).collect()
        }
    }
}

/// Credentials and endpoint for the S3 client factory.
#[derive(Clone, PartialEq, Eq)]
pub struct S3Config {
    pub access_key: String,
    pub secret_key: String,
    /// Custom endpoint for S3-compatible stores; `None` uses AWS.
    pub host_url: Option<String>,
    pub region: String,
}

impl S3Config {
    /// Read `SE_ACCESS_KEY`, `SE_SECRET_KEY` and `SE_HOST_URL` from the process environment.
    /// Returns the name of the first missing required variable on failure.
    pub fn from_env() -> Result<Self, &'static str> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, &'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_key = non_empty(ENV_ACCESS_KEY).ok_or(ENV_ACCESS_KEY)?;
        let secret_key = non_empty(ENV_SECRET_KEY).ok_or(ENV_SECRET_KEY)?;

        Ok(Self {
            access_key,
            secret_key,
            host_url: non_empty(ENV_HOST_URL),
            region: DEFAULT_REGION.to_string(),
        })
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("host_url", &self.host_url)
            .field("region", &self.region)
            .finish()
    }
}

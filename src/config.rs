use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use http::Uri;

use crate::cli::Cli;

/// Base endpoint of the reference registration authority.
pub const DEFAULT_API_ENDPOINT: &str = "https://krypton.soracom.io:8036";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_RETRY_LIMIT: usize = 10;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct Config {
    pub target_dir: PathBuf,
    pub api_endpoint: Uri,
    pub request_timeout: Duration,
    pub retry_limit: usize,
    pub poll_interval: Duration,
}

impl Config {
    pub fn new(cli: Cli) -> Result<Self> {
        let target_dir = match cli.target_dir {
            Some(dir) => dir,
            None => env::current_dir().context("cannot determine current directory")?,
        };

        Ok(Self {
            target_dir,
            api_endpoint: cli
                .api_endpoint
                .unwrap_or_else(|| Uri::from_static(DEFAULT_API_ENDPOINT)),
            request_timeout: cli.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            retry_limit: cli.retry_limit.unwrap_or(DEFAULT_RETRY_LIMIT),
            poll_interval: cli.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_reference_constants() {
        let cli = Cli::parse_from(["argon", "--target-dir", "/tmp"]);
        let config = Config::new(cli).unwrap();

        assert_eq!(config.target_dir, PathBuf::from("/tmp"));
        assert_eq!(config.api_endpoint, Uri::from_static(DEFAULT_API_ENDPOINT));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.retry_limit, 10);
        assert_eq!(config.poll_interval, Duration::from_secs(1));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "argon",
            "--target-dir",
            "/tmp",
            "--api-endpoint",
            "http://localhost:8036",
            "--request-timeout-ms",
            "2500",
            "--retry-limit",
            "3",
            "--poll-interval-ms",
            "100",
        ]);
        let config = Config::new(cli).unwrap();

        assert_eq!(
            config.api_endpoint,
            Uri::from_static("http://localhost:8036")
        );
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.retry_limit, 3);
        assert_eq!(config.poll_interval, Duration::from_millis(100));
    }
}

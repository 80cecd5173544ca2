use clap::Parser;
use http::Uri;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

fn parse_duration(s: &str) -> Result<Duration, ParseIntError> {
    let millis: u64 = s.parse()?;
    Ok(Duration::from_millis(millis))
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)] // read from Cargo.toml
pub struct Cli {
    /// Directory to write the issued certificate and private key into
    #[arg(env = "ARGON_TARGET_DIR", long = "target-dir", value_name = "dir")]
    pub target_dir: Option<PathBuf>,

    /// Registration authority base endpoint URI
    #[arg(env = "ARGON_API_ENDPOINT", long = "api-endpoint", value_name = "uri")]
    pub api_endpoint: Option<Uri>,

    /// Request timeout in milliseconds for register and status calls
    #[arg(
        env = "ARGON_REQUEST_TIMEOUT_MS",
        long = "request-timeout-ms",
        value_name = "ms",
        value_parser = parse_duration
    )]
    pub request_timeout: Option<Duration>,

    /// Maximum number of status poll attempts
    #[arg(env = "ARGON_RETRY_LIMIT", long = "retry-limit", value_name = "int")]
    pub retry_limit: Option<usize>,

    /// Delay between status poll attempts in milliseconds
    #[arg(
        env = "ARGON_POLL_INTERVAL_MS",
        long = "poll-interval-ms",
        value_name = "ms",
        value_parser = parse_duration
    )]
    pub poll_interval: Option<Duration>,
}

pub fn parse() -> Cli {
    Parser::parse()
}

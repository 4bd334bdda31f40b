//! CLI argument parsing and API configuration.
use std::{env, path::PathBuf, time::Duration};

use clap::Parser;
use secrecy::SecretString;

use crate::{
    collector::CollectorOptions,
    config::DEFAULT_REPOS_FILE,
    forge::config::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, RemoteConfig},
    retry::RetryPolicy,
};

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_API_KEY";
/// Default minutes to wait after hitting a rate limit.
pub const DEFAULT_RATE_LIMIT_WAIT_MINUTES: u64 = 61;
/// Upper bound for the rate limit wait: one week.
pub const MAX_RATE_LIMIT_WAIT_MINUTES: u64 = 7 * 24 * 60;

/// Collect the unique commit authors of GitHub repositories, their branches
/// and their forks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_REPOS_FILE)]
    /// JSON file listing the repositories to inspect.
    pub repos_file: PathBuf,

    #[arg(long)]
    /// GitHub personal access token. Falls back to GITHUB_API_KEY env var.
    pub token: Option<String>,

    #[arg(long, default_value = DEFAULT_API_URL)]
    /// Base URL of the GitHub REST API (for GitHub Enterprise).
    pub api_url: String,

    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    /// Items requested per page.
    pub per_page: u8,

    #[arg(
        long,
        default_value_t = DEFAULT_RATE_LIMIT_WAIT_MINUTES,
        value_parser =
            clap::value_parser!(u64).range(0..=MAX_RATE_LIMIT_WAIT_MINUTES)
    )]
    /// Minutes to wait before retrying after a rate limit.
    pub rate_limit_wait_minutes: u64,

    #[arg(long, default_value_t = false)]
    /// Only inspect the tracked repositories, not their forks.
    pub skip_forks: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the API connection, resolving the token from the
    /// environment when not given on the command line.
    pub fn remote_config(&self) -> RemoteConfig {
        let token = resolve_token(self.token.clone(), env::var(TOKEN_ENV_VAR).ok());

        RemoteConfig {
            api_url: self.api_url.clone(),
            token,
            per_page: self.per_page,
        }
    }

    pub fn collector_options(&self) -> CollectorOptions {
        CollectorOptions {
            include_forks: !self.skip_forks,
            retry: RetryPolicy::new(Duration::from_secs(
                self.rate_limit_wait_minutes.saturating_mul(60),
            )),
        }
    }
}

/// Picks the explicit token if set, else the environment token if set.
fn resolve_token(
    explicit: Option<String>,
    from_env: Option<String>,
) -> Option<SecretString> {
    explicit
        .or(from_env)
        .filter(|token| !token.is_empty())
        .map(SecretString::from)
}

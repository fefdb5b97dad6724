use crate::client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_TOKEN: &str = "token";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .short('u')
                .long(ARG_BASE_URL)
                .help("Base URL of the novel writing service")
                .env("NOVELIST_BASE_URL")
                .global(true)
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long(ARG_TIMEOUT_MS)
                .help("Request timeout in milliseconds")
                .long_help(
                    "Request timeout in milliseconds. Chapter generation can take many minutes, so the default is 20 minutes.",
                )
                .env("NOVELIST_TIMEOUT_MS")
                .global(true)
                .default_value("1200000")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long(ARG_TOKEN)
                .help("Bearer token returned by `novelist login`")
                .env("NOVELIST_TOKEN")
                .global(true)
                .hide_env_values(true),
        )
}

/// Connection settings shared by every subcommand.
pub struct Options {
    pub base_url: String,
    pub timeout_ms: u64,
    pub token: Option<SecretString>,
}

impl Options {
    /// # Errors
    /// Returns an error if the base URL is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let base_url = matches
            .get_one::<String>(ARG_BASE_URL)
            .cloned()
            .context("missing required argument: --base-url")?;
        let timeout_ms = matches
            .get_one::<u64>(ARG_TIMEOUT_MS)
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let token = matches
            .get_one::<String>(ARG_TOKEN)
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .map(|token| SecretString::from(token.to_string()));

        Ok(Self {
            base_url,
            timeout_ms,
            token,
        })
    }
}

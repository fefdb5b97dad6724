use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        with_credentials(Command::new(CMD_REGISTER).about("Create an account")),
        with_credentials(
            Command::new(CMD_LOGIN).about("Sign in and print the session token"),
        ),
    ]
}

fn with_credentials(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USERNAME)
                .long(ARG_USERNAME)
                .help("Account name")
                .env("NOVELIST_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long(ARG_PASSWORD)
                .help("Account password")
                .env("NOVELIST_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

pub struct Options {
    pub username: String,
    pub password: String,
}

impl Options {
    /// # Errors
    /// Returns an error if username or password is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let username = matches
            .get_one::<String>(ARG_USERNAME)
            .cloned()
            .context("missing required argument: --username")?;
        let password = matches
            .get_one::<String>(ARG_PASSWORD)
            .cloned()
            .context("missing required argument: --password")?;

        Ok(Self { username, password })
    }
}

use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted from `NOVELIST_LOG_LEVEL`, indexed by verbosity count.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parses a verbosity given as a count (`0..=5`) or a level name.
fn parse_verbosity(level: &str) -> Result<u8, String> {
    let level = level.trim();

    if let Ok(count) = level.parse::<u8>() {
        return if count <= 5 {
            Ok(count)
        } else {
            Err(format!("verbosity {count} is out of range (0-5)"))
        };
    }

    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level: {level}"))
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_verbosity)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity; repeat for more detail (-v warn, -vv info, -vvv debug)")
            .long_help(
                "Log verbosity. Repeat the flag for more detail, or set NOVELIST_LOG_LEVEL to one of error, warn, info, debug, trace. Logs are written to stderr.",
            )
            .env("NOVELIST_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

use clap::{Arg, Command};

pub const CMD_ROUTE: &str = "route";
pub const ARG_TARGET: &str = "target";
pub const ARG_FROM: &str = "from";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_ROUTE)
        .about("Show where a page navigation lands for the current token")
        .arg(
            Arg::new(ARG_TARGET)
                .help("Page path, e.g. /writer")
                .required(true),
        )
        .arg(
            Arg::new(ARG_FROM)
                .long(ARG_FROM)
                .help("Page the navigation starts from")
                .default_value("/"),
        )
}

use clap::{Arg, Command};

pub const CMD_INIT: &str = "init";
pub const CMD_NEXT: &str = "next";
pub const CMD_STATUS: &str = "status";
pub const CMD_LIST: &str = "list";
pub const CMD_EXPORT: &str = "export";

pub const ARG_NOVEL_ID: &str = "novel-id";
pub const ARG_TOPIC: &str = "topic";
pub const ARG_OUTPUT: &str = "output";

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new(CMD_INIT)
            .about("Create a novel and generate its first chapter")
            .arg(novel_id_flag())
            .arg(
                Arg::new(ARG_TOPIC)
                    .long(ARG_TOPIC)
                    .help("What the novel is about")
                    .required(true),
            ),
        Command::new(CMD_NEXT)
            .about("Generate the next chapter")
            .arg(novel_id_flag()),
        Command::new(CMD_STATUS)
            .about("Show generation progress")
            .arg(novel_id_positional()),
        Command::new(CMD_LIST).about("List your novels"),
        Command::new(CMD_EXPORT)
            .about("Download the full novel as a text file")
            .arg(novel_id_positional())
            .arg(
                Arg::new(ARG_OUTPUT)
                    .short('o')
                    .long(ARG_OUTPUT)
                    .help("Output file, or - for stdout (default: novel_<id>.txt)"),
            ),
    ]
}

fn novel_id_flag() -> Arg {
    Arg::new(ARG_NOVEL_ID)
        .long(ARG_NOVEL_ID)
        .help("Novel identifier")
        .required(true)
}

fn novel_id_positional() -> Arg {
    Arg::new(ARG_NOVEL_ID)
        .help("Novel identifier")
        .required(true)
}

//! Command-line argument dispatch.
//!
//! This module maps validated CLI matches to the [`Action`] the binary runs,
//! resolving the shared connection settings once for every subcommand.

use crate::api::{AuthRequest, InitNovelRequest, NextChapterRequest};
use crate::cli::actions::{Action, account, novel, route};
use crate::cli::commands::{
    account as account_cmd, connection, novel as novel_cmd, route as route_cmd,
};
use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let connection = connection::Options::parse(matches)?;

    let mut globals = GlobalArgs::new(
        connection.base_url,
        Duration::from_millis(connection.timeout_ms),
    );
    if let Some(token) = connection.token {
        globals.set_token(token);
    }

    let (name, sub_m) = matches
        .subcommand()
        .context("missing subcommand, see --help")?;

    match name {
        account_cmd::CMD_REGISTER | account_cmd::CMD_LOGIN => {
            let options = account_cmd::Options::parse(sub_m)?;
            let args = account::Args {
                globals,
                credentials: AuthRequest {
                    username: options.username,
                    password: options.password,
                },
            };
            if name == account_cmd::CMD_LOGIN {
                Ok(Action::Login(args))
            } else {
                Ok(Action::Register(args))
            }
        }
        novel_cmd::CMD_INIT => Ok(novel_action(
            globals,
            novel::Command::Init(InitNovelRequest {
                novel_id: required(sub_m, novel_cmd::ARG_NOVEL_ID)?,
                topic: required(sub_m, novel_cmd::ARG_TOPIC)?,
            }),
        )),
        novel_cmd::CMD_NEXT => Ok(novel_action(
            globals,
            novel::Command::Next(NextChapterRequest {
                novel_id: required(sub_m, novel_cmd::ARG_NOVEL_ID)?,
            }),
        )),
        novel_cmd::CMD_STATUS => Ok(novel_action(
            globals,
            novel::Command::Status {
                novel_id: required(sub_m, novel_cmd::ARG_NOVEL_ID)?,
            },
        )),
        novel_cmd::CMD_LIST => Ok(novel_action(globals, novel::Command::List)),
        novel_cmd::CMD_EXPORT => Ok(novel_action(
            globals,
            novel::Command::Export {
                novel_id: required(sub_m, novel_cmd::ARG_NOVEL_ID)?,
                output: sub_m
                    .get_one::<String>(novel_cmd::ARG_OUTPUT)
                    .map(PathBuf::from),
            },
        )),
        route_cmd::CMD_ROUTE => Ok(Action::Route(route::Args {
            globals,
            target: required(sub_m, route_cmd::ARG_TARGET)?,
            from: sub_m
                .get_one::<String>(route_cmd::ARG_FROM)
                .cloned()
                .unwrap_or_else(|| "/".to_string()),
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

const fn novel_action(globals: GlobalArgs, command: novel::Command) -> Action {
    Action::Novel(novel::Args { globals, command })
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

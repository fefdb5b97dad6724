use crate::api::{InitNovelRequest, NextChapterRequest, NovelApi};
use crate::cli::{actions::print_json, globals::GlobalArgs};
use anyhow::{Context, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init(InitNovelRequest),
    Next(NextChapterRequest),
    Status { novel_id: String },
    List,
    Export {
        novel_id: String,
        output: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Where an export should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    #[must_use]
    pub fn resolve(novel_id: &str, output: Option<PathBuf>) -> Self {
        match output {
            Some(path) if path.as_os_str() == "-" => Self::Stdout,
            Some(path) => Self::File(path),
            None => Self::File(PathBuf::from(default_export_file_name(novel_id))),
        }
    }
}

/// Mirrors the name the service puts in `Content-Disposition`.
#[must_use]
pub fn default_export_file_name(novel_id: &str) -> String {
    let safe: String = novel_id
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("novel_{safe}.txt")
}

/// Run a novel subcommand.
/// # Errors
/// Returns an error if the client cannot be built, the service rejects the call,
/// or the export cannot be written.
pub async fn execute(args: Args) -> Result<()> {
    let api = NovelApi::new(args.globals.client()?);

    match args.command {
        Command::Init(request) => print_json(&api.init_novel(&request).await?),
        Command::Next(request) => print_json(&api.next_chapter(&request).await?),
        Command::Status { novel_id } => print_json(&api.status(&novel_id).await?),
        Command::List => print_json(&api.list().await?),
        Command::Export { novel_id, output } => {
            let bytes = api.export(&novel_id).await?;
            match ExportTarget::resolve(&novel_id, output) {
                ExportTarget::Stdout => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
                ExportTarget::File(path) => {
                    tokio::fs::write(&path, &bytes)
                        .await
                        .with_context(|| format!("Failed to write export: {}", path.display()))?;
                    info!(path = %path.display(), bytes = bytes.len(), "export written");
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
    }
}

//! Command line of the `docsearch` binary.

use crate::config::Config;
use crate::ingestion::indexer::index_directory;
use crate::search::engine::search;
use crate::server::{serve, AppState};
use crate::storage::IndexStore;

use anyhow::{bail, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Index the documents under `dir` into the index file.
    Index { dir: PathBuf },
    /// Print the hits of `query`, as text or as a JSON array.
    Search { query: String, json: bool },
    /// Start the HTTP server.
    Serve,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <SUBCOMMAND> [OPTIONS]
Subcommands:
    index <folder>            Index the documents under <folder> into the index file
    search [--json] <query>   Print the documents of the index file matching <query>
    serve                     Start the HTTP server with the web interface
Environment:
    DOCSEARCH_INDEX, DOCSEARCH_BIND, DOCSEARCH_RESULT_LIMIT, RUST_LOG
"
    )
}

/// Parses the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let Some(subcommand) = args.next() else {
        bail!("no subcommand is provided");
    };

    match subcommand.as_str() {
        "index" => match args.next() {
            Some(dir) => Ok(Command::Index {
                dir: PathBuf::from(dir),
            }),
            None => bail!("no folder is provided for indexing"),
        },
        "search" => {
            let mut json = false;
            let mut words = Vec::new();
            for arg in args {
                if arg == "--json" {
                    json = true;
                } else {
                    words.push(arg);
                }
            }

            let query = words.join(" ");
            if query.trim().is_empty() {
                bail!("no query is provided");
            }
            Ok(Command::Search { query, json })
        }
        "serve" => Ok(Command::Serve),
        _ => bail!("unknown subcommand: {subcommand}"),
    }
}

/// Runs `command`, writing its report to `out`. `serve` only returns on error.
pub async fn execute<W: Write>(command: Command, config: &Config, out: &mut W) -> Result<()> {
    match command {
        Command::Index { dir } => {
            let store = IndexStore::new();
            let report = index_directory(&dir, &store)?;
            store.save(&config.index_path)?;

            writeln!(
                out,
                "Indexed {} documents ({} skipped) in {:?} into {}",
                report.indexed,
                report.skipped,
                report.elapsed,
                config.index_path.display()
            )?;
        }
        Command::Search { query, json } => {
            let limit = config.result_limit()?;
            let store = IndexStore::load(&config.index_path)?;
            let hits = search(&query, &store, limit);

            if json {
                serde_json::to_writer_pretty(&mut *out, &hits)?;
                writeln!(out)?;
            } else {
                for hit in hits {
                    writeln!(out, "{:>10.6}  {}", hit.score, hit.path.display())?;
                }
            }
        }
        Command::Serve => {
            let bind_addr = config.bind_addr()?;
            let state = AppState {
                store: Arc::new(IndexStore::load(&config.index_path)?),
                result_limit: config.result_limit()?,
            };

            tracing::info!("Press Ctrl+C to shutdown");
            serve(bind_addr, state).await?;
        }
    }

    Ok(())
}

/// Maps the outcome of a run to the process exit code, logging failures.
pub fn exit_code(result: &Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

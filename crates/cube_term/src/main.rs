#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod frames;
mod trace;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::Parser;
use cube_parser::{CubeCommand, CubeEngine, CubeParser, Operation, ParserStats, limits};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use serde::Serialize;

use crate::{frames::split_frames, trace::TraceEngine};

pub type TermResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Parse cube commands and trace the engine calls they produce", long_about = None)]
pub struct Args {
    /// File with one or more commands per line, stdin if omitted
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print each message before its result
    #[clap(long, default_value_t = false, conflicts_with = "json")]
    echo: bool,

    /// Emit one JSON record per message instead of executing it
    #[clap(long, default_value_t = false)]
    json: bool,

    /// Voxels per cube edge, coordinates beyond it are reported
    #[clap(long, default_value_t = 4)]
    size: u8,

    /// Write a rotating log file into this directory instead of stderr
    #[clap(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log specification, overridden by RUST_LOG
    #[clap(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct MessageRecord<'a> {
    line: usize,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    op: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<CubeCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u8>,
}

fn start_logger(args: &Args) -> TermResult<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&args.log_level)?;
    let logger = if let Some(log_dir) = &args.log_dir {
        std::fs::create_dir_all(log_dir).with_context(|| format!("creating log directory {}", log_dir.display()))?;
        logger
            .log_to_file(FileSpec::default().directory(log_dir).basename("cube_term").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(Duplicate::Warn)
    } else {
        logger.log_to_stderr()
    };
    Ok(logger.start()?)
}

/// Reads `input` line by line and handles every message on it.
///
/// Decoded messages are executed on a [`TraceEngine`] writing to `out`, or
/// serialized as JSON lines in `json` mode. Rejected messages are reported
/// inline with their numeric code.
pub fn process<R: BufRead, W: Write>(input: R, out: W, args: &Args) -> TermResult<ParserStats> {
    let mut parser = CubeParser::new();
    let mut engine = TraceEngine::new(out, args.size);

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", index + 1))?;
        for message in split_frames(&line) {
            if args.echo {
                engine.print(&format!("> {message}"));
            }
            let mut buf = message.as_bytes().to_vec();

            if args.json {
                let record = match parser.parse(&mut buf) {
                    Ok(command) => MessageRecord {
                        line: index + 1,
                        message,
                        op: Some(command.operation()),
                        command: Some(command),
                        error: None,
                        code: None,
                    },
                    Err(err) => MessageRecord {
                        line: index + 1,
                        message,
                        op: None,
                        command: None,
                        error: Some(err.to_string()),
                        code: Some(err.code()),
                    },
                };
                engine.print(&serde_json::to_string(&record)?);
            } else if let Err(err) = parser.run(&mut buf, &mut engine) {
                engine.print(&format!("error {}: {err}", err.code()));
            }
        }
        engine.take_error()?;
    }

    log::info!("Traced {} engine calls", engine.calls());
    engine.into_inner().flush()?;
    Ok(parser.stats())
}

fn main() -> TermResult<ExitCode> {
    let args = Args::parse();
    let _logger = start_logger(&args)?;

    if !limits::is_addressable(args.size) {
        bail!("cube size must be between 1 and {}, got {}", limits::MAX_CUBE_SIZE, args.size);
    }

    let stdout = io::stdout();
    let stats = if let Some(path) = &args.path {
        log::info!("Reading commands from {}", path.display());
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        process(BufReader::new(file), stdout.lock(), &args)?
    } else {
        process(io::stdin().lock(), stdout.lock(), &args)?
    };

    log::info!("{} messages parsed, {} rejected", stats.parsed, stats.failed);
    Ok(if stats.failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

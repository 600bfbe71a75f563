//! `claw`: read nested values out of JSON documents with typed defaults

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use claw_access::{LogLevel, TracingSink, get, has, need, set_logger};
use claw_log::{Config, Format};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "claw", version, about, long_about = None)]
struct Cli {
    /// Log output format (pretty, compact, json)
    #[arg(long, global = true, env = "CLAW_LOG_FORMAT")]
    log_format: Option<Format>,

    /// Log filter directive, e.g. `warn` or `claw_access=debug`
    #[arg(long, global = true, env = "CLAW_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value at PATH, or the default; fallbacks are logged at warn
    Get(GetArgs),
    /// Like `get`, with a chosen log level for fallbacks
    Need(NeedArgs),
    /// Print `true` when PATH resolves to a non-null value
    Has(HasArgs),
}

#[derive(Debug, Args)]
struct Source {
    /// JSON document to read (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Dotted path, e.g. `items[0].name`
    path: String,

    /// Default value as JSON; anything that is not JSON is taken as a string
    #[arg(short, long)]
    default: Option<String>,

    #[command(flatten)]
    source: Source,
}

#[derive(Debug, Args)]
struct NeedArgs {
    #[command(flatten)]
    get: GetArgs,

    /// Level fallbacks are reported at (error, warn, info, debug, log)
    #[arg(short, long, default_value = "warn", conflicts_with = "quiet")]
    level: LogLevel,

    /// Do not report fallbacks
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Args)]
struct HasArgs {
    /// Dotted path, e.g. `items[0].name`
    path: String,

    #[command(flatten)]
    source: Source,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().with_service("claw");
    if let Some(level) = cli.log_level {
        config.level = level;
    }
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    let _guard = claw_log::init_with(config).context("failed to initialise logging")?;
    set_logger(Arc::new(TracingSink)).context("failed to register diagnostic sink")?;

    match cli.command {
        Command::Get(args) => {
            let doc = read_document(&args.source)?;
            let value = get(&doc, args.path.as_str(), parse_default(args.default));
            print_value(&value)?;
        }
        Command::Need(args) => {
            let doc = read_document(&args.get.source)?;
            let level = (!args.quiet).then_some(args.level);
            let value = need(&doc, args.get.path.as_str(), parse_default(args.get.default), level);
            print_value(&value)?;
        }
        Command::Has(args) => {
            let doc = read_document(&args.source)?;
            println!("{}", has(&doc, args.path.as_str()));
        }
    }
    Ok(())
}

fn read_document(source: &Source) -> Result<Value> {
    let text = match &source.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };
    tracing::debug!(bytes = text.len(), "document loaded");
    serde_json::from_str(&text).context("input is not valid JSON")
}

/// `0` -> number, `[]` -> array, `abc` -> string; `None` stays omitted
fn parse_default(raw: Option<String>) -> Option<Value> {
    raw.map(|raw| serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
}

fn print_value(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

mod commands;
mod render;
mod setup;

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::OnceCell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use self::commands::{
    handle_add, handle_config, handle_delete, handle_edit, handle_list, init_context,
};
use self::render::print_messages;
use self::setup::{Cli, Commands};

const LOG_ENV: &str = "JOT_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(LOG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_tracing(&level).with_context(|| format!("initialising logging at level {}", level))?;

    let mut ctx = init_context(&cli)?;
    print_messages(&ctx.api.take_startup_messages());

    match cli.command {
        Some(Commands::Add { title, content }) => handle_add(&mut ctx, &title, &content),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, &id, title, content),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_tracing(level: &str) -> Result<()> {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_try_init(|| {
        fmt()
            .with_env_filter(log_filter(level)?)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
    })
    .map(|_| ())
}

/// A bare word must be a level name; anything with `=` is a full filter directive.
fn log_filter(level: &str) -> Result<EnvFilter> {
    if level.contains('=') {
        return Ok(EnvFilter::try_new(level)?);
    }
    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown log level {:?}", level))?;
    Ok(EnvFilter::new(level.to_string()))
}

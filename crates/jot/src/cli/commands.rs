use anyhow::{bail, Context, Result};
use chrono::Local;
use jotapp::api::JotApi;
use jotapp::commands::DeletePrompt;
use jotapp::config::{resolve_data_dir, JotConfig};
use jotapp::format::escape_terminal;
use jotapp::model::NoteId;
use jotapp::store::fs_backend::FsBackend;
use jotapp::store::NotePersistence;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::render::{print_messages, print_state};
use super::setup::Cli;

pub struct AppContext {
    pub api: JotApi<FsBackend>,
    pub config: JotConfig,
    pub data_dir: PathBuf,
}

pub fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = JotConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening notes");

    let persistence =
        NotePersistence::with_key(FsBackend::new(&data_dir), config.storage_key.clone());
    Ok(AppContext {
        api: JotApi::open(persistence),
        config,
        data_dir,
    })
}

pub fn handle_add(ctx: &mut AppContext, title: &str, content: &str) -> Result<()> {
    let result = ctx.api.save(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_list(ctx: &AppContext) -> Result<()> {
    let state = ctx.api.render_with(&Local::now(), escape_terminal);
    print_state(&state);
    Ok(())
}

pub fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        bail!("Nothing to change: pass --title and/or --content");
    }

    let form = ctx
        .api
        .edit(&NoteId::from(id))?
        .form
        .context("edit did not return the note")?;
    let title = title.unwrap_or(form.title);
    let content = content.unwrap_or(form.content);

    let result = ctx.api.save(&title, &content)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    let prompt = ctx
        .api
        .request_delete(&NoteId::from(id))?
        .prompt
        .context("delete request did not return a prompt")?;

    let confirmed = yes || !ctx.config.confirm_deletes || ask(&prompt)?;
    let result = if confirmed {
        ctx.api.confirm_delete(&prompt.token)?
    } else {
        ctx.api.cancel_delete(&prompt.token)?
    };
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in JotConfig::KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
    }
    Ok(())
}

/// y/N prompt on stdin. End of input counts as "no".
fn ask(prompt: &DeletePrompt) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(
        stderr,
        "{} \"{}\" [y/N] ",
        prompt.message,
        escape_terminal(&prompt.title)
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

//! # CLI Layer
//!
//! This module is **one possible UI client** for snipz. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Install logging and open the API over the data directory
//! 3. **API Dispatch**: Call the appropriate `SnipzApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.
//! Persistence failures are not errors here: the command layer reports them
//! as warnings and the change stays in effect for the rest of the run.

use super::render::{
    render_commands, render_config, render_full_snippet, render_menu, render_messages,
    render_snippet_list,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use snipz::api::SnipzApi;
use snipz::commands::{CmdResult, SnippetUpdate};
use snipz::config::SnipzConfig;
use snipz::error::{Result, SnipzError};
use snipz::init::{initialize, SnipzContext};
use snipz::logging;
use snipz::store::fs_backend::FsBackend;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: SnipzApi<FsBackend>,
    config: SnipzConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let SnipzContext {
        api,
        config,
        data_dir,
    } = initialize(cli.data.clone())?;
    let mut ctx = AppContext {
        api,
        config,
        data_dir,
    };

    let outcome = match cli.command {
        Some(Commands::List { group }) => handle_list(&ctx, group),
        Some(Commands::View { key }) => handle_view(&ctx, &key),
        Some(Commands::Add {
            key,
            text,
            icon,
            group,
            force,
        }) => handle_add(&mut ctx, &key, text, icon, group, force),
        Some(Commands::Edit {
            key,
            rename,
            text,
            icon,
            group,
        }) => handle_edit(&mut ctx, key, rename, text, icon, group),
        Some(Commands::Delete { keys }) => handle_delete(&mut ctx, &keys),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Apply { key, selection }) => handle_apply(&ctx, &key, selection),
        Some(Commands::Menu) => handle_menu(&ctx),
        Some(Commands::Commands) => handle_commands(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, None),
    };

    ctx.api.shutdown();
    outcome
}

fn handle_list(ctx: &AppContext, group: Option<String>) -> Result<()> {
    let result = ctx.api.list_snippets(group.as_deref())?;
    let repo = ctx.api.repository();
    let rows: Vec<_> = result
        .listed_snippets
        .iter()
        .map(|s| (repo.position(&s.key).map_or(0, |p| p + 1), s))
        .collect();
    print!("{}", render_snippet_list(&rows));
    print_messages(&result);
    Ok(())
}

fn handle_view(ctx: &AppContext, key: &str) -> Result<()> {
    let result = ctx.api.view_snippet(key)?;
    for snippet in &result.listed_snippets {
        print!("{}", render_full_snippet(snippet));
    }
    print_messages(&result);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    key: &str,
    text: Option<String>,
    icon: Option<String>,
    group: Option<String>,
    force: bool,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_piped_stdin()?
            .map(|buffer| buffer.trim_end_matches(['\n', '\r']).to_string())
            .filter(|buffer| !buffer.is_empty())
            .ok_or_else(|| {
                SnipzError::Api(
                    "No snippet text given; pass it as an argument or pipe it in".to_string(),
                )
            })?,
    };

    let result = ctx.api.add_snippet(key, text, icon, group, force)?;
    print_messages(&result);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    key: String,
    rename: Option<String>,
    text: Option<String>,
    icon: Option<String>,
    group: Option<String>,
) -> Result<()> {
    let update = SnippetUpdate {
        key,
        new_key: rename,
        text,
        icon,
        group,
    };
    let result = ctx.api.update_snippet(&update)?;
    print_messages(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, keys: &[String]) -> Result<()> {
    let result = ctx.api.delete_snippets(keys)?;
    print_messages(&result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_snippet(from, to)?;
    print_messages(&result);
    Ok(())
}

fn handle_apply(ctx: &AppContext, key: &str, selection: Option<String>) -> Result<()> {
    let selection = match selection {
        Some(selection) => selection,
        None => read_piped_stdin()?.unwrap_or_default(),
    };

    let result = ctx.api.apply_snippet(key, &selection)?;
    if let Some(output) = &result.output {
        println!("{}", output);
    }
    // stdout carries only the filled text, so it can be piped on.
    eprint!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_menu(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.menu()?;
    print!("{}", render_menu(&result.menu));
    Ok(())
}

fn handle_commands(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_commands()?;
    print!("{}", render_commands(&result.commands));
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let mut entries = ctx.config.entries();
    entries.push(("data_dir", ctx.data_dir.display().to_string()));
    print!("{}", render_config(&entries));
    Ok(())
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

/// Stdin contents when something is piped in; `None` for an interactive terminal.
fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

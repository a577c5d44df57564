//! # CLI Layer
//!
//! This module is **one possible UI client** for docfind. It is the only place
//! that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! Results go to stdout; messages, the error panel and logs go to stderr.

use super::browse;
use super::render::{
    print_messages, render_doctor_list, render_error_panel, render_specialities,
    render_suggestions, render_summary, render_url,
};
use super::setup::{Cli, Commands, FilterArgs};
use super::init_logging;
use clap::Parser;
use docfind::api::{CmdMessage, DirectoryApi};
use docfind::config::{ConfigKey, DirectoryConfig};
use docfind::error::Result;
use docfind::records::LoadStatus;
use docfind::source::{source_for, DataSource};
use docfind::url_sync::MemoryLocation;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

pub(super) type CliApi = DirectoryApi<Box<dyn DataSource>, MemoryLocation>;

struct AppContext {
    api: CliApi,
    config_dir: PathBuf,
    config: DirectoryConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Suggest { text }) => handle_suggest(ctx, &text),
        Some(Commands::Specialities) => handle_specialities(ctx),
        Some(Commands::Browse) => handle_browse(ctx),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_list(ctx, FilterArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = DirectoryConfig::default_dir()?;
    let config = DirectoryConfig::load(&config_dir)?;

    let source = source_for(cli.source.as_deref().unwrap_or(&config.source));
    let location = MemoryLocation::with_query(cli.query.as_deref().unwrap_or(""));
    let api = DirectoryApi::new(source, location, config.page_url.clone());

    Ok(AppContext {
        api,
        config_dir,
        config,
    })
}

/// Mounts the filters and fetches the records. Non-interactive commands have
/// nothing to show without records, so a failed load ends the process.
fn load_or_exit(ctx: &mut AppContext) {
    ctx.api.mount();
    let loaded = ctx.api.load();
    if let LoadStatus::Failed(message) = ctx.api.status() {
        eprint!("{}", render_error_panel(message));
        std::process::exit(1);
    }
    print_messages(&loaded.messages);
}

fn handle_list(mut ctx: AppContext, args: FilterArgs) -> Result<()> {
    load_or_exit(&mut ctx);

    let mut state = ctx.api.filters().clone();
    if let Some(search) = args.search {
        state = state.with_search(search);
    }
    if let Some(consultation) = args.consultation {
        state = state.with_consultation_type(consultation.to_filter());
    }
    if !args.specialities.is_empty() {
        state = state.with_specialities(args.specialities);
    }
    if let Some(sort) = args.sort {
        state = state.with_sort_by(sort.to_filter());
    }

    let available = ctx.api.available_specialities().specialities;
    let unknown: Vec<CmdMessage> = state
        .specialities
        .iter()
        .filter(|name| !available.contains(*name))
        .map(|name| CmdMessage::warning(format!("Unknown speciality: {}", name)))
        .collect();
    print_messages(&unknown);

    let result = ctx.api.replace_filters(state);
    print!("{}", render_summary(result.doctors.len(), ctx.api.filters().sort_by));
    println!();
    print!("{}", render_doctor_list(&result.doctors));
    println!();
    print!("{}", render_url(&ctx.api.page_url()));
    Ok(())
}

fn handle_suggest(mut ctx: AppContext, text: &str) -> Result<()> {
    load_or_exit(&mut ctx);
    let result = ctx.api.suggest(text);
    print!("{}", render_suggestions(&result.suggestions));
    Ok(())
}

fn handle_specialities(mut ctx: AppContext) -> Result<()> {
    load_or_exit(&mut ctx);
    let result = ctx.api.available_specialities();
    print!(
        "{}",
        render_specialities(&result.specialities, &ctx.api.filters().specialities)
    );
    Ok(())
}

fn handle_browse(mut ctx: AppContext) -> Result<()> {
    ctx.api.mount();
    let loaded = ctx.api.load();
    if let LoadStatus::Failed(message) = ctx.api.status() {
        eprint!("{}", render_error_panel(message));
    } else {
        print_messages(&loaded.messages);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    browse::run_session(&mut ctx.api, stdin.lock(), stdout.lock(), interactive)?;
    ctx.api.unmount();
    Ok(())
}

fn handle_config(mut ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in [ConfigKey::Source, ConfigKey::PageUrl] {
                println!("{} = {}", key.name(), ctx.config.get(key));
            }
        }
        (Some(key), None) => {
            let key = ConfigKey::parse(&key)?;
            println!("{} = {}", key.name(), ctx.config.get(key));
        }
        (Some(key), Some(value)) => {
            let key = ConfigKey::parse(&key)?;
            ctx.config.set(key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            print_messages(&[CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                ctx.config.get(key)
            ))]);
        }
    }
    Ok(())
}

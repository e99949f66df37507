//! # CLI Layer
//!
//! This module is **one possible UI client** for blogsearch. The engine lives in
//! the library; everything here is argument parsing, terminal I/O and exit
//! codes.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging and dispatches (called by `main.rs`)
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! Handlers never compute pages themselves. They drive [`BlogApi`] and hand the
//! returned `CmdResult` to the renderers.

use super::browse::run_session;
use super::render::{render_categories, render_messages, render_page, render_page_json};
use super::setup::{Cli, Commands};
use blogsearch::api::{BlogApi, CmdMessage, ConfigAction};
use blogsearch::commands;
use blogsearch::config::BlogConfig;
use blogsearch::error::{BlogError, Result};
use blogsearch::init::{config_dir, initialize};
use blogsearch::store::seed::SeedStore;
use blogsearch::store::RecordStore;
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;
use std::io::Write;

#[derive(Default)]
struct ListArgs {
    search: Option<String>,
    category: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = if cli.no_color { Some(false) } else { None };

    match cli.command {
        Some(Commands::List {
            search,
            category,
            page,
            page_size,
            json,
        }) => handle_list(
            ListArgs {
                search,
                category,
                page,
                page_size,
                json,
            },
            use_color,
        ),
        Some(Commands::Categories) => handle_categories(use_color),
        Some(Commands::Browse { page_size }) => handle_browse(page_size, use_color),
        Some(Commands::Config { key, value }) => handle_config(key, value, use_color),
        None => handle_list(ListArgs::default(), use_color),
    }
}

/// Warnings only unless `-v`; `RUST_LOG` always wins.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn init_api(page_size: Option<usize>) -> Result<BlogApi<SeedStore>> {
    let api = initialize(page_size)?;
    debug!(
        "{} posts loaded, page size {}",
        api.store().len(),
        api.page_size()
    );
    Ok(api)
}

fn handle_list(args: ListArgs, use_color: Option<bool>) -> Result<()> {
    let mut api = init_api(args.page_size)?;

    let mut messages = Vec::new();
    let mut result = api.view()?;

    if let Some(text) = &args.search {
        result = api.search(text)?;
    }
    if let Some(category) = &args.category {
        result = select_or_explain(&mut api, category)?;
    }
    if let Some(page) = args.page {
        result = api.change_page(page)?;
        if result.page_accepted == Some(false) {
            let total = result.page_view.as_ref().map_or(0, |v| v.total_pages);
            let msg = if total == 0 {
                format!("Page {} is out of range, nothing matched", page)
            } else {
                format!(
                    "Page {} is out of range (1-{}), showing page {}",
                    page,
                    total,
                    api.query().page_number()
                )
            };
            messages.push(CmdMessage::warning(msg));
        }
    }

    if args.json {
        eprint!("{}", render_messages(&messages, use_color));
        println!("{}", render_page_json(&result)?);
    } else {
        print!("{}", render_messages(&messages, use_color));
        print!("{}", render_page(&result, use_color));
    }
    Ok(())
}

fn select_or_explain<S: RecordStore>(
    api: &mut BlogApi<S>,
    category: &str,
) -> Result<blogsearch::api::CmdResult> {
    api.select_category(category).map_err(|e| match e {
        BlogError::UnknownCategory(name) => BlogError::UnknownCategory(format!(
            "{} (choose from {})",
            name,
            api.category_set().labels().join(", ")
        )),
        other => other,
    })
}

fn handle_categories(use_color: Option<bool>) -> Result<()> {
    let api = init_api(None)?;
    let result = api.categories()?;
    print!(
        "{}",
        render_categories(&result.categories, api.query().category(), use_color)
    );
    Ok(())
}

fn handle_browse(page_size: Option<usize>, use_color: Option<bool>) -> Result<()> {
    let mut api = init_api(page_size)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(&mut api, stdin.lock(), &mut stdout, use_color)?;
    stdout.flush()?;
    Ok(())
}

/// Works on the config directory directly, so a broken config file can still
/// be inspected and repaired.
fn handle_config(key: Option<String>, value: Option<String>, use_color: Option<bool>) -> Result<()> {
    let dir = config_dir()
        .ok_or_else(|| BlogError::Config("No config directory available".to_string()))?;

    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&dir, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print!("{}", render_messages(&result.messages, use_color));
    Ok(())
}

fn print_config(config: &BlogConfig) {
    for key in BlogConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

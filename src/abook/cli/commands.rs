use super::print::{print_config, print_contacts, print_messages, print_pages, print_rows};
use super::setup::{BirthdayCommands, Cli, Commands, PhoneCommands};
use abook::api::{AbookApi, AbookPaths, ConfigAction};
use abook::config::AbookConfig;
use abook::error::{AbookError, Result};
use abook::logging::{init_logging, Verbosity};
use abook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::BufRead;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const HOME_ENV: &str = "ABOOK_HOME";

struct AppContext {
    api: AbookApi<FileStore>,
    config: AbookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_occurrences(cli.verbose));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            birthday,
            phones,
        }) => handle_add(&mut ctx, &name, birthday.as_deref(), &phones),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::Phone { action }) => handle_phone(&mut ctx, action),
        Some(Commands::Birthday { action }) => handle_birthday(&mut ctx, action),
        Some(Commands::List { batch_size }) => handle_list(&ctx, batch_size),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Read { path }) => handle_read(&ctx, path),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = AbookConfig::load(&data_dir)?;
    let store = FileStore::new(config.contacts_path(&data_dir));
    tracing::debug!(data_dir = %data_dir.display(), "using data dir");

    Ok(AppContext {
        api: AbookApi::new(store, AbookPaths::new(data_dir)),
        config,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Store("Could not determine data dir".to_string()))
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    birthday: Option<&str>,
    phones: &[String],
) -> Result<()> {
    let result = ctx.api.add_contact(name, birthday, phones)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show_contact(name)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_contact(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_phone(ctx: &mut AppContext, action: PhoneCommands) -> Result<()> {
    let result = match action {
        PhoneCommands::Add { name, number } => ctx.api.add_phone(&name, &number)?,
        PhoneCommands::Remove { name, number } => ctx.api.remove_phone(&name, &number)?,
        PhoneCommands::Edit { name, old, new } => ctx.api.edit_phone(&name, &old, &new)?,
        PhoneCommands::Find { name, number } => ctx.api.find_phone(&name, &number)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthday(ctx: &mut AppContext, action: BirthdayCommands) -> Result<()> {
    let result = match action {
        BirthdayCommands::Set { name, date } => ctx.api.set_birthday(&name, &date)?,
        BirthdayCommands::Days { name } => ctx.api.days_to_birthday(&name)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, batch_size: Option<NonZeroUsize>) -> Result<()> {
    let batch_size = batch_size.unwrap_or_else(|| ctx.config.batch_size());
    let result = ctx.api.list_contacts(batch_size)?;
    print_pages(&result.pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: Option<String>) -> Result<()> {
    let term = match term {
        Some(term) => term,
        None => read_term()?,
    };
    let result = ctx.api.search_contacts(&term)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

/// One line from stdin, without its line ending.
fn read_term() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export_contacts(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_read(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.read_contacts(&path)?;
    print_rows(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.contacts_path()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

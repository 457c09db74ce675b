use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use todos::api::TodoApp;
use todos::config::TodoConfig;
use todos::error::{Result, TodoError};
use todos::form::FormValues;
use todos::model::TodoId;
use todos::store::fs::FileStore;
use todos::todos::TodoModel;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::{print_field_errors, print_messages, print_todos};

/// Overrides the platform data directory.
const HOME_ENV: &str = "TODOS_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    app: TodoApp<FileStore>,
    config: TodoConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = data_dir()?;
    match cli.command.unwrap_or(Commands::List { filter: None }) {
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        command => {
            let mut ctx = init_context(data_dir)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add { title, description } => handle_add(ctx, title, description),
        Commands::Edit {
            id,
            title,
            description,
        } => handle_edit(ctx, &id, title, description),
        Commands::Done { id } => handle_done(ctx, &id),
        Commands::Delete { id } => handle_delete(ctx, &id),
        Commands::List { filter } => handle_list(ctx, filter),
        Commands::Render { filter, out } => handle_render(ctx, filter, out),
        Commands::Config { key, value } => handle_config(&ctx.data_dir, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "todos", "todos")
        .ok_or_else(|| TodoError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = TodoConfig::load(&data_dir)?;
    log::debug!("Using data dir {}", data_dir.display());

    let store = FileStore::new(data_dir.clone());
    let model = TodoModel::load_with(store, config.storage_key.clone(), Vec::new())?;

    Ok(AppContext {
        app: TodoApp::new(model),
        config,
        data_dir,
    })
}

fn parse_id(raw: &str) -> Result<TodoId> {
    raw.parse()
}

fn handle_add(ctx: &mut AppContext, title: String, description: String) -> Result<()> {
    submit(ctx, FormValues::new(title, description))
}

fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let id = parse_id(id)?;
    ctx.app.edit(id)?;

    let mut values = ctx.app.form().values.clone();
    if let Some(title) = title {
        values.title = title;
    }
    if let Some(description) = description {
        values.description = description;
    }
    submit(ctx, values)
}

fn submit(ctx: &mut AppContext, values: FormValues) -> Result<()> {
    let result = ctx.app.submit(values)?;
    if let Some(errors) = &result.errors {
        print_field_errors(errors);
        return Err(TodoError::Api("Todo was not saved".into()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.app.done(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.app.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>) -> Result<()> {
    if let Some(term) = filter {
        ctx.app.filter(&term)?;
    }
    print_todos(ctx.app.visible());
    Ok(())
}

fn handle_render(ctx: &mut AppContext, filter: Option<String>, out: Option<PathBuf>) -> Result<()> {
    if let Some(term) = filter {
        ctx.app.filter(&term)?;
    }
    let html = ctx.app.render_page(&ctx.config.page_title)?;

    match out {
        Some(path) => {
            std::fs::write(&path, html).map_err(TodoError::Io)?;
            println!("{}", format!("Page written to {}", path.display()).green());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TodoConfig::load(data_dir)?;

    match (key, value) {
        (None, _) => {
            for key in TodoConfig::keys() {
                println!("{}: {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            println!("{}", format!("{} set to {}", key, value).green());
        }
    }
    Ok(())
}

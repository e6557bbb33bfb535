use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::{debug, LevelFilter};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use todo::api::{CmdMessage, MessageLevel, TodoApi};
use todo::config::TodoConfig;
use todo::error::{Result, TodoError};
use todo::model::{ListFilter, Todo};
use todo::store::AppStore;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "TODO_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodoApi<AppStore>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let open = || init_context(&data_dir);

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut open()?, text),
        Some(Commands::List { pending, completed }) => {
            let filter = if pending {
                ListFilter::Pending
            } else if completed {
                ListFilter::Completed
            } else {
                ListFilter::All
            };
            handle_list(&open()?, filter)
        }
        Some(Commands::Show { id }) => handle_show(&open()?, &id),
        Some(Commands::Edit { id, text }) => handle_edit(&mut open()?, &id, text),
        Some(Commands::Toggle { id }) => report(open()?.api.toggle(&id)?.messages),
        Some(Commands::Done { id }) => report(open()?.api.complete(&id)?.messages),
        Some(Commands::Undone { id }) => report(open()?.api.reopen(&id)?.messages),
        Some(Commands::Rm { id }) => report(open()?.api.delete(&id)?.messages),
        Some(Commands::Config { key, value }) => handle_config(&data_dir, key, value),
        None => handle_list(&open()?, ListFilter::All),
    }
}

/// `--data-dir`, then `$TODO_HOME`, then the platform data dir.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todo", "todo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("could not determine a data directory".into()))
}

fn init_context(data_dir: &Path) -> Result<AppContext> {
    let config = TodoConfig::load(data_dir)?;
    debug!("data dir {} backend {}", data_dir.display(), config.backend);
    let store = AppStore::open(config.backend, data_dir)?;
    Ok(AppContext {
        api: TodoApi::new(store),
    })
}

fn handle_add(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let result = ctx.api.create(&words.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: ListFilter) -> Result<()> {
    let result = ctx.api.list(filter)?;
    for todo in &result.listed {
        print_todo(todo);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.find(id)?;
    for todo in &result.listed {
        print_todo(todo);
        println!(
            "{}",
            format!(
                "  created {}  updated {}",
                todo.created_at.format("%Y-%m-%d %H:%M"),
                todo.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, words: Vec<String>) -> Result<()> {
    let result = ctx.api.update_text(id, &words.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TodoConfig::load(data_dir)?;
    match (key, value) {
        (None, _) => {
            println!("backend = {}", config.backend);
            println!("{}", format!("data dir: {}", data_dir.display()).dimmed());
        }
        (Some(key), None) => println!("{} = {}", key, config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            print_messages(&[CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            ))]);
        }
    }
    Ok(())
}

fn report(messages: Vec<CmdMessage>) -> Result<()> {
    print_messages(&messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_todo(todo: &Todo) {
    let mark = if todo.is_completed { "x" } else { " " };
    let text = if todo.is_completed {
        todo.text.dimmed()
    } else {
        todo.text.normal()
    };
    println!("- [{}] ({}) {}", mark, todo.id.yellow(), text);
}

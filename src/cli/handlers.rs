use std::path::Path;

use crate::api::HttpBackend;
use crate::cli::commands::*;
use crate::cli::output;
use crate::io::config_io::{self, ConfigError};
use crate::model::config::ClientConfig;
use crate::model::list::ListId;
use crate::model::task::{TaskDraft, TaskId};
use crate::ops::{list_ops, task_ops};
use crate::store::Store;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve config for CLI runs: `--server` alone is enough; a config file
/// fills in the rest when present.
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let explicit = cli.config.as_deref().map(Path::new);
    match config_io::load_config(explicit) {
        Ok(mut config) => {
            if let Some(server) = &cli.server {
                config.server_url = server.clone();
            }
            Ok(config)
        }
        Err(ConfigError::NotFound) if cli.server.is_some() => {
            Ok(ClientConfig::new(cli.server.clone().unwrap_or_default()))
        }
        Err(err) => Err(err),
    }
}

pub fn dispatch(cli: Cli) -> CliResult {
    let config = resolve_config(&cli)?;
    let json = cli.json;

    let backend = HttpBackend::new(&config.server_url)?;
    let mut store = Store::new();
    for seed in &config.lists {
        store.push_list(crate::model::list::TaskList::new(seed.id, seed.name.clone()));
    }

    match cli.command {
        None => {
            // main.rs routes the no-subcommand case to the TUI
            Ok(())
        }
        Some(Commands::Tasks(args)) => {
            let list_id = resolve_list(&config, args.list)?;
            open_list(&mut store, &backend, list_id)?;
            cmd_tasks(&store, json)
        }
        Some(Commands::Add(args)) => {
            let list_id = resolve_list(&config, args.list)?;
            open_list(&mut store, &backend, list_id)?;
            let draft = TaskDraft {
                text: args.text,
                due_date: args.due,
                priority: args.priority,
            };
            let id = task_ops::add_task(&mut store, &backend, &draft)?;
            let task = store.task(id).ok_or("task missing after add")?;
            println!("added {}", output::task_line(task));
            Ok(())
        }
        Some(Commands::Toggle(args)) => {
            let list_id = resolve_list(&config, args.list)?;
            open_list(&mut store, &backend, list_id)?;
            let complete = task_ops::toggle_task(&mut store, &backend, TaskId(args.id))?;
            println!(
                "task {} is now {}",
                args.id,
                if complete { "done" } else { "open" }
            );
            Ok(())
        }
        Some(Commands::Rm(args)) => {
            if !args.yes {
                return Err("deleting is permanent; pass --yes to confirm".into());
            }
            let list_id = resolve_list(&config, args.list)?;
            open_list(&mut store, &backend, list_id)?;
            task_ops::delete_task(&mut store, &backend, TaskId(args.id))?;
            println!("deleted task {}", args.id);
            Ok(())
        }
        Some(Commands::Edit(args)) => {
            let list_id = resolve_list(&config, args.list)?;
            open_list(&mut store, &backend, list_id)?;
            let outcome =
                task_ops::update_task_text(&mut store, &backend, TaskId(args.id), &args.text)?;
            match outcome {
                task_ops::EditOutcome::Updated => println!("updated task {}", args.id),
                task_ops::EditOutcome::Unchanged => println!("unchanged"),
            }
            Ok(())
        }
        Some(Commands::NewList(args)) => {
            let id = list_ops::create_list(&mut store, &backend, &args.name)?;
            println!("created list {} ({})", args.name.trim(), id);
            Ok(())
        }
        Some(Commands::Switch(args)) => {
            open_list(&mut store, &backend, ListId(args.id))?;
            cmd_tasks(&store, json)
        }
    }
}

/// A list id must come from `--list` or the config's `initial_list_id`
fn resolve_list(config: &ClientConfig, flag: Option<i64>) -> Result<ListId, Box<dyn std::error::Error>> {
    flag.map(ListId)
        .or(config.initial_list_id)
        .ok_or_else(|| "no list given (use --list or set initial_list_id in taskdeck.toml)".into())
}

/// Fetch a list's page so task operations have a store to work against
fn open_list(
    store: &mut Store,
    backend: &HttpBackend,
    id: ListId,
) -> Result<(), Box<dyn std::error::Error>> {
    store.ensure_list(id);
    list_ops::switch_list(store, backend, id)?;
    Ok(())
}

fn cmd_tasks(store: &Store, json: bool) -> CliResult {
    let list = store.active_list().ok_or("no active list")?;
    let tasks: Vec<_> = store.tasks().collect();
    output::print_tasks(list, &tasks, json);
    Ok(())
}

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::{Commands, YesNo};
use cli::prompt::{get_user_input, resolve_due_date, resolve_priority, validate_date};
use taskmgr::config::Config;
use taskmgr::render::{print_task_details, print_tasks_table};
use taskmgr::storage::{self, TaskFilter, TaskStore};
use taskmgr::task::{Priority, Task};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskmgr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskmgr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, store: &mut dyn TaskStore) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
        Some(Commands::Add {
            title,
            description,
            due_date,
            priority,
            category,
        }) => handle_add(
            store,
            title.as_deref(),
            description.as_deref(),
            due_date.as_deref(),
            *priority,
            category.as_deref(),
        ),
        Some(Commands::List) => handle_list(store),
        Some(Commands::Show { id }) => handle_show(store, *id),
        Some(Commands::Complete { id }) => handle_complete(store, *id),
        Some(Commands::Delete { id }) => handle_delete(store, *id),
        Some(Commands::Update { id }) => handle_update(store, *id),
        Some(Commands::Search { query }) => handle_search(store, query),
        Some(Commands::Filter {
            completed,
            priority,
            category,
        }) => handle_filter(store, *completed, *priority, category.clone()),
    }
}

fn handle_add(
    store: &mut dyn TaskStore,
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<&str>,
    priority: Option<u8>,
    category: Option<&str>,
) -> Result<()> {
    let title = match title {
        Some(t) => t.trim().to_string(),
        None => get_user_input("Task title", None)?,
    };
    if title.is_empty() {
        println!("{}", "A title is required!".red());
        return Ok(());
    }

    let description = match description {
        Some(d) => Some(d.to_string()),
        None => {
            let answer = get_user_input("Description (optional)", None)?;
            if answer.is_empty() { None } else { Some(answer) }
        }
    };

    let due_date = match due_date {
        Some(d) if validate_date(d) => Some(d.to_string()),
        Some(_) => {
            println!("{}", "Invalid date, expected YYYY-MM-DD. Due date dropped.".yellow());
            None
        }
        None => {
            let answer = get_user_input("Due date (YYYY-MM-DD, optional)", None)?;
            resolve_due_date(&answer, None)
        }
    };

    let priority = match priority {
        Some(p) => match Priority::from_u8(p) {
            Some(priority) => priority,
            None => {
                println!("{}", "Priority must be 1, 2, or 3. Using 1.".yellow());
                Priority::Low
            }
        },
        None => {
            let answer = get_user_input("Priority (1-low, 2-medium, 3-high)", Some("1"))?;
            resolve_priority(&answer, Priority::Low)
        }
    };

    let category = match category {
        Some(c) => Some(c.to_string()),
        None => {
            let answer = get_user_input("Category (optional)", None)?;
            if answer.is_empty() { None } else { Some(answer) }
        }
    };

    let mut task = Task::new(title);
    task.description = description;
    task.due_date = due_date;
    task.priority = priority;
    task.category = category;

    info!("Adding task: {}", task.title);
    let task = store.add(task).context("Failed to add task")?;

    println!("{}", "Task added:".green());
    print_task_details(&task);
    Ok(())
}

fn handle_list(store: &dyn TaskStore) -> Result<()> {
    info!("Listing all tasks");
    let tasks = store.list_all().context("Failed to list tasks")?;
    print_tasks_table(&tasks, "All tasks");
    Ok(())
}

fn handle_show(store: &dyn TaskStore, id: i64) -> Result<()> {
    info!("Showing task: {}", id);
    match store.get(id).context("Failed to look up task")? {
        Some(task) => print_task_details(&task),
        None => println!("No task found with id #{}", id),
    }
    Ok(())
}

fn handle_complete(store: &mut dyn TaskStore, id: i64) -> Result<()> {
    info!("Completing task: {}", id);
    match store.get(id).context("Failed to look up task")? {
        Some(mut task) => {
            if task.completed {
                println!("Task #{} is already completed", task.id);
            } else {
                task.completed = true;
                store.update(&task).context("Failed to update task")?;
                println!("{} #{} marked as completed", "Task".green(), task.id);
            }
        }
        None => println!("No task found with id #{}", id),
    }
    Ok(())
}

fn handle_delete(store: &mut dyn TaskStore, id: i64) -> Result<()> {
    info!("Deleting task: {}", id);
    if store.delete(id).context("Failed to delete task")? {
        println!("{} #{}", "Deleted task".green(), id);
    } else {
        println!("No task found with id #{}", id);
    }
    Ok(())
}

fn handle_update(store: &mut dyn TaskStore, id: i64) -> Result<()> {
    info!("Updating task: {}", id);
    let Some(mut task) = store.get(id).context("Failed to look up task")? else {
        println!("No task found with id #{}", id);
        return Ok(());
    };

    println!("Leave a field blank to keep the current value");
    print_task_details(&task);

    // An empty answer keeps the current value, so the title stays non-empty
    task.title = get_user_input("New title", Some(&task.title))?;

    let description = get_user_input("New description", task.description.as_deref())?;
    task.description = if description.is_empty() { None } else { Some(description) };

    let due_answer = get_user_input("New due date (YYYY-MM-DD)", task.due_date.as_deref())?;
    task.due_date = resolve_due_date(&due_answer, task.due_date.take());

    let priority_answer = get_user_input(
        "New priority (1-low, 2-medium, 3-high)",
        Some(&task.priority.as_u8().to_string()),
    )?;
    task.priority = resolve_priority(&priority_answer, task.priority);

    let category = get_user_input("New category", task.category.as_deref())?;
    task.category = if category.is_empty() { None } else { Some(category) };

    if store.update(&task).context("Failed to update task")? {
        println!("{}", "Task updated:".green());
        print_task_details(&task);
    } else {
        println!("{}", "Failed to update task".red());
    }
    Ok(())
}

fn handle_search(store: &dyn TaskStore, query: &str) -> Result<()> {
    info!("Searching tasks for: {}", query);
    let tasks = store.search(query).context("Failed to search tasks")?;
    print_tasks_table(&tasks, &format!("Search results for '{}'", query));
    Ok(())
}

fn handle_filter(
    store: &dyn TaskStore,
    completed: Option<YesNo>,
    priority: Option<u8>,
    category: Option<String>,
) -> Result<()> {
    let filter = TaskFilter {
        completed: completed.map(YesNo::as_bool),
        priority: priority.and_then(Priority::from_u8),
        category,
    };
    info!("Filtering tasks: {:?}", filter);

    let tasks = store.filter(&filter).context("Failed to filter tasks")?;

    let mut parts = Vec::new();
    if let Some(completed) = filter.completed {
        parts.push(if completed { "completed".to_string() } else { "open".to_string() });
    }
    if let Some(priority) = filter.priority {
        parts.push(format!("priority {}", priority.as_u8()));
    }
    if let Some(category) = &filter.category {
        parts.push(format!("category '{}'", category));
    }

    let title = if parts.is_empty() {
        "Filtered tasks".to_string()
    } else {
        format!("Filtered tasks: {}", parts.join(", "))
    };
    print_tasks_table(&tasks, &title);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Backend is chosen once here and fixed for the process lifetime
    let backend = cli.storage.unwrap_or(config.storage.backend);
    info!("Opening {:?} backend", backend);
    let mut store = storage::open(backend, &config).context("Failed to open storage backend")?;

    run_application(&cli, store.as_mut())
}

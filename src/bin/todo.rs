//! Terminal front end for the multi-list to-do API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use todolists::client::HttpTodoApi;
use todolists::models::TodoItem;
use todolists::views::{
    ActionOutcome, ActiveTodosView, CompletedTodosView, Confirm, ListSelectorView, ViewState,
};

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Manage to-do lists from the terminal", long_about = None)]
struct Cli {
    /// Root URL of the API server
    #[arg(long, env = "TODO_API_URL", default_value = "http://127.0.0.1:4000")]
    api_url: String,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all lists, newest first
    Lists,
    /// Create a list
    Create { name: String },
    /// Delete a list and all of its items
    Delete { list_id: String },
    /// Show the active items of a list
    Show { list_id: String },
    /// Show the completed items of a list
    Completed { list_id: String },
    /// Add an item to a list
    Add { list_id: String, text: String },
    /// Mark an item as done
    Done { list_id: String, todo_id: String },
    /// Mark a completed item as not done
    Undo { list_id: String, todo_id: String },
    /// Delete an item
    Remove { list_id: String, todo_id: String },
}

/// Asks on the terminal unless `--yes` was given.
struct TerminalConfirm {
    assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    todolists::init_tracing("error", todolists::config::LogFormat::Text);

    let api = HttpTodoApi::new(&cli.api_url);
    let confirm = TerminalConfirm {
        assume_yes: cli.yes,
    };

    let result = match cli.command {
        Command::Lists => lists(api).await,
        Command::Create { name } => create(api, &name).await,
        Command::Delete { list_id } => delete(api, &list_id, &confirm).await,
        Command::Show { list_id } => show_active(api, &list_id, None).await,
        Command::Completed { list_id } => show_completed(api, &list_id, None).await,
        Command::Add { list_id, text } => show_active(api, &list_id, Some(Action::Add(text))).await,
        Command::Done { list_id, todo_id } => {
            show_active(api, &list_id, Some(Action::Done(todo_id))).await
        }
        Command::Undo { list_id, todo_id } => {
            show_completed(api, &list_id, Some(Action::Undo(todo_id))).await
        }
        Command::Remove { list_id, todo_id } => {
            remove(api, &list_id, &todo_id, &confirm).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {}", "Error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

enum Action {
    Add(String),
    Done(String),
    Undo(String),
}

type CliResult = Result<(), String>;

fn check_state(state: &ViewState) -> CliResult {
    match state {
        ViewState::Failed(message) => Err(message.clone()),
        _ => Ok(()),
    }
}

fn check_outcome(outcome: ActionOutcome, error: Option<&str>) -> CliResult {
    match outcome {
        ActionOutcome::Failed => Err(error.unwrap_or("request failed").to_string()),
        ActionOutcome::Skipped => {
            println!("{}", "Nothing changed.".dimmed());
            Ok(())
        }
        ActionOutcome::Applied => Ok(()),
    }
}

async fn lists(api: HttpTodoApi) -> CliResult {
    let mut view = ListSelectorView::new(api);
    view.load().await;
    check_state(view.state())?;

    if view.lists().is_empty() {
        println!("No ToDo lists found. Create one!");
    }
    for list in view.lists() {
        println!("{}  {}", list.id.dimmed(), list.name.bold());
    }
    Ok(())
}

async fn create(api: HttpTodoApi, name: &str) -> CliResult {
    let mut view = ListSelectorView::new(api);
    view.load().await;
    check_state(view.state())?;

    let outcome = view.create_list(name).await;
    check_outcome(outcome, view.error())?;
    if let Some(list) = view.lists().iter().find(|list| list.name == name.trim()) {
        println!("{} {}  {}", "Created".green(), list.id.dimmed(), list.name.bold());
    }
    Ok(())
}

async fn delete<C: Confirm>(api: HttpTodoApi, list_id: &str, confirm: &C) -> CliResult {
    let mut view = ListSelectorView::new(api);
    view.load().await;
    check_state(view.state())?;

    let outcome = view.delete_list(list_id, confirm).await;
    check_outcome(outcome, view.error())?;
    if outcome == ActionOutcome::Applied {
        println!("{}", "ToDo List and all its items deleted.".green());
    }
    Ok(())
}

async fn show_active(api: HttpTodoApi, list_id: &str, action: Option<Action>) -> CliResult {
    let mut view = ActiveTodosView::new(api);
    view.load(list_id).await;
    check_state(view.state())?;

    match action {
        Some(Action::Add(text)) => check_outcome(view.add(&text).await, view.error())?,
        Some(Action::Done(todo_id)) => {
            check_outcome(view.mark_done(&todo_id).await, view.error())?
        }
        _ => {}
    }

    let name = view.list().map_or(list_id, |list| list.name.as_str());
    let active = view.active();
    println!(
        "{} - Active Tasks {}",
        name.bold(),
        format!("[{}]", active.len()).blue()
    );
    if active.is_empty() {
        println!("No active tasks!");
    }
    print_items(&active, "[ ]".normal());
    Ok(())
}

async fn show_completed(api: HttpTodoApi, list_id: &str, action: Option<Action>) -> CliResult {
    let mut view = CompletedTodosView::new(api);
    view.load(list_id).await;
    check_state(view.state())?;

    if let Some(Action::Undo(todo_id)) = action {
        check_outcome(view.mark_not_done(&todo_id).await, view.error())?;
    }

    let name = view.list().map_or(list_id, |list| list.name.as_str());
    let completed = view.completed();
    println!(
        "{} - Completed Tasks {}",
        name.bold(),
        format!("[{}]", completed.len()).green()
    );
    if completed.is_empty() {
        println!("No completed tasks yet.");
    }
    print_items(&completed, "[x]".green());
    Ok(())
}

async fn remove<C: Confirm>(
    api: HttpTodoApi,
    list_id: &str,
    todo_id: &str,
    confirm: &C,
) -> CliResult {
    let mut active = ActiveTodosView::new(api.clone());
    active.load(list_id).await;
    check_state(active.state())?;

    if active.active().iter().any(|item| item.id == todo_id) {
        check_outcome(active.delete(todo_id, confirm).await, active.error())?;
        return Ok(());
    }

    let mut completed = CompletedTodosView::new(api);
    completed.load(list_id).await;
    check_state(completed.state())?;
    check_outcome(completed.delete(todo_id, confirm).await, completed.error())
}

fn print_items(items: &[&TodoItem], marker: colored::ColoredString) {
    for item in items {
        println!("  {} {}  {}", marker, item.text, item.id.dimmed());
    }
}

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use expense_tracker::{
    cli_utils::{
        confirm, format_expense_table, format_summary, formatting::print_header, print_error,
        print_info, print_success, CliResult, ExpenseAction, Input,
    },
    expenses::{
        db_types::{CreateExpenseInput, DateRangeFilter, SortKey, UpdateExpenseInput},
        operations::{
            add_expense, backup_expenses, delete_expense, get_filtered, get_sorted, get_summary,
            list_expenses, update_expense,
        },
    },
    storage::{ExpenseStorage, JsonFileStorage},
    utils::app_config::StorageConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "expenses-cli",
    about = "Interactive maintenance tool for the expense data file"
)]
struct CliArgs {
    #[command(flatten)]
    storage: StorageConfig,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    let args = CliArgs::parse();
    let storage = args.storage.build();

    print_header("Expense Tracker");
    print_info(&format!("Data file: {}", storage.data_file().display()));

    loop {
        let action = ExpenseAction::select()?;
        if action == ExpenseAction::Exit {
            return Ok(());
        }

        if let Err(e) = run_action(&storage, action) {
            print_error(&e.to_string());
        }
    }
}

fn run_action(storage: &JsonFileStorage, action: ExpenseAction) -> CliResult<()> {
    match action {
        ExpenseAction::List => {
            println!("{}", format_expense_table(&list_expenses(storage)?));
        }
        ExpenseAction::Add => add_expense_cli(storage)?,
        ExpenseAction::Update => update_expense_cli(storage)?,
        ExpenseAction::Delete => {
            let id = Input::get_id("Expense id")?;
            if confirm(&format!("Delete expense {}?", id))? {
                print_success(&delete_expense(storage, id)?);
            }
        }
        ExpenseAction::Summary => {
            println!("{}", format_summary(&get_summary(storage)?));
        }
        ExpenseAction::Filter => {
            let filter = DateRangeFilter {
                start: Input::get_optional_string("Start date (YYYY-MM-DD)")?,
                end: Input::get_optional_string("End date (YYYY-MM-DD)")?,
            };
            println!("{}", format_expense_table(&get_filtered(storage, &filter)?));
        }
        ExpenseAction::Sort => {
            let by = Input::get_optional_string("Sort by (amount/date)")?;
            let key = SortKey::parse(by.as_deref().map(str::trim));
            println!("{}", format_expense_table(&get_sorted(storage, key)?));
        }
        ExpenseAction::Backup => {
            print_success(&backup_expenses(storage)?);
        }
        ExpenseAction::Exit => {}
    }

    Ok(())
}

fn add_expense_cli(storage: &dyn ExpenseStorage) -> CliResult<()> {
    let amount = Input::get_string("Amount")?;
    let date = Input::get_string("Date (YYYY-MM-DD)")?;
    let note = Input::get_string("Note")?;
    let category = Input::get_optional_string("Category")?;

    let expense = add_expense(
        storage,
        CreateExpenseInput {
            amount: Some(Value::String(amount)),
            date: Some(date),
            note: Some(note),
            category,
        },
    )?;

    print_success(&format!("Created expense {}", expense.id));
    Ok(())
}

fn update_expense_cli(storage: &dyn ExpenseStorage) -> CliResult<()> {
    let id = Input::get_id("Expense id")?;
    print_info("Leave a field empty to keep its current value");

    let input = UpdateExpenseInput {
        amount: Input::get_optional_string("Amount")?.map(Value::String),
        date: Input::get_optional_string("Date (YYYY-MM-DD)")?.map(Some),
        note: Input::get_optional_string("Note")?.map(Some),
        category: Input::get_optional_string("Category")?,
    };

    let expense = update_expense(storage, id, input)?;
    print_success(&format!("Updated expense {}", expense.id));
    Ok(())
}

use std::collections::BTreeMap;

use crate::{
    error::{StoreError, StoreResult},
    expenses::{
        db_types::{
            CreateExpenseInput, DEFAULT_CATEGORY, DateRangeFilter, Expense, ExpenseSummary,
            SortKey, UpdateExpenseInput,
        },
        validation::{parse_amount, validate_date_field, validate_note},
    },
    storage::ExpenseStorage,
};

/// Next id for a collection: one past the largest id, or 1 when empty
pub fn generate_id(expenses: &[Expense]) -> StoreResult<u64> {
    match expenses.iter().map(|e| e.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted),
    }
}

pub fn list_expenses(storage: &dyn ExpenseStorage) -> StoreResult<Vec<Expense>> {
    storage.load()
}

pub fn add_expense(
    storage: &dyn ExpenseStorage,
    input: CreateExpenseInput,
) -> StoreResult<Expense> {
    let (Some(raw_amount), Some(date), Some(note)) = (input.amount, input.date, input.note) else {
        return Err(StoreError::MissingField("amount, date and note are required"));
    };

    let amount = parse_amount(&raw_amount)?;
    validate_date_field(&date)?;
    validate_note(&note)?;

    let mut expenses = storage.load()?;
    let expense = Expense {
        id: generate_id(&expenses)?,
        amount,
        date,
        note,
        category: input
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    };

    expenses.push(expense.clone());
    storage.save(&expenses)?;

    tracing::info!("Created expense {} ({} on {})", expense.id, expense.amount, expense.date);
    Ok(expense)
}

/// Apply the supplied fields of `input` to expense `id`.
///
/// Every supplied field is validated before anything is written; a single
/// rejected field leaves the stored record untouched.
pub fn update_expense(
    storage: &dyn ExpenseStorage,
    id: u64,
    input: UpdateExpenseInput,
) -> StoreResult<Expense> {
    let mut expenses = storage.load()?;
    let Some(position) = expenses.iter().position(|e| e.id == id) else {
        return Err(StoreError::NotFound(id));
    };

    let amount = input.amount.as_ref().map(parse_amount).transpose()?;
    match &input.date {
        Some(Some(date)) => validate_date_field(date)?,
        Some(None) => return Err(StoreError::InvalidDate),
        None => {}
    }
    match &input.note {
        Some(Some(note)) => validate_note(note)?,
        Some(None) => return Err(StoreError::EmptyNote),
        None => {}
    }

    let expense = &mut expenses[position];
    if let Some(amount) = amount {
        expense.amount = amount;
    }
    if let Some(Some(date)) = input.date {
        expense.date = date;
    }
    if let Some(Some(note)) = input.note {
        expense.note = note;
    }
    if let Some(category) = input.category {
        expense.category = category;
    }

    let updated = expense.clone();
    storage.save(&expenses)?;

    tracing::info!("Updated expense {}", id);
    Ok(updated)
}

pub fn delete_expense(storage: &dyn ExpenseStorage, id: u64) -> StoreResult<String> {
    let mut expenses = storage.load()?;
    let initial_len = expenses.len();
    expenses.retain(|e| e.id != id);

    if expenses.len() == initial_len {
        return Err(StoreError::NotFound(id));
    }

    storage.save(&expenses)?;

    tracing::info!("Deleted expense {}", id);
    Ok("Expense deleted".to_string())
}

pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    ExpenseSummary {
        total: expenses.iter().map(|e| e.amount).sum(),
        by_category,
    }
}

pub fn get_summary(storage: &dyn ExpenseStorage) -> StoreResult<ExpenseSummary> {
    Ok(summarize(&storage.load()?))
}

/// Keep records whose date falls inside the inclusive range.
///
/// Dates are compared as strings, which matches chronological order for
/// `YYYY-MM-DD`. A blank bound counts as not given.
pub fn filter_by_date(expenses: Vec<Expense>, filter: &DateRangeFilter) -> Vec<Expense> {
    let start = bound(&filter.start);
    let end = bound(&filter.end);

    expenses
        .into_iter()
        .filter(|e| {
            start.is_none_or(|start| e.date.as_str() >= start)
                && end.is_none_or(|end| e.date.as_str() <= end)
        })
        .collect()
}

fn bound(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

pub fn get_filtered(
    storage: &dyn ExpenseStorage,
    filter: &DateRangeFilter,
) -> StoreResult<Vec<Expense>> {
    Ok(filter_by_date(storage.load()?, filter))
}

/// Stable ascending sort by the chosen key
pub fn sort_expenses(mut expenses: Vec<Expense>, key: SortKey) -> Vec<Expense> {
    match key {
        SortKey::Amount => expenses.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortKey::Date => expenses.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    expenses
}

pub fn get_sorted(storage: &dyn ExpenseStorage, key: SortKey) -> StoreResult<Vec<Expense>> {
    Ok(sort_expenses(storage.load()?, key))
}

pub fn backup_expenses(storage: &dyn ExpenseStorage) -> StoreResult<String> {
    let location = storage.backup()?;
    Ok(format!("Backup written to {}", location))
}

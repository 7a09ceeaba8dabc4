use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::{
        error::ApiError,
        extractors::ExpensePayload,
        response::MessageResponse,
    },
    expenses::{
        db_types::{
            CreateExpenseInput, DateRangeFilter, Expense, ExpenseSummary, SortKey,
            UpdateExpenseInput,
        },
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput},
    },
    utils::{app_config::AppConfig, traits::ActionProcessor},
};

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub by: Option<String>,
}

fn parse_expense_id(id: &str) -> Result<u64, ApiError> {
    id.parse::<u64>().map_err(|_| ApiError::not_found("Expense"))
}

fn unexpected() -> ApiError {
    ApiError::internal_error("Unexpected response type")
}

/// GET /api/expenses - All expenses in stored order
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    match ExpensesProcessorInput::List.process(&app_config)? {
        ExpensesProcessorOutput::List(expenses) => Ok(Json(expenses)),
        _ => Err(unexpected()),
    }
}

/// POST /api/expenses - Create an expense
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    ExpensePayload(payload): ExpensePayload<CreateExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    match ExpensesProcessorInput::Add(payload).process(&app_config)? {
        ExpensesProcessorOutput::Add(expense) => Ok((StatusCode::CREATED, Json(expense))),
        _ => Err(unexpected()),
    }
}

/// PUT /api/expenses/{id} - Apply the supplied fields to an expense
pub async fn update_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    ExpensePayload(payload): ExpensePayload<UpdateExpenseInput>,
) -> Result<Json<Expense>, ApiError> {
    let expense_id = parse_expense_id(&id)?;

    match ExpensesProcessorInput::Update(expense_id, payload).process(&app_config)? {
        ExpensesProcessorOutput::Update(expense) => Ok(Json(expense)),
        _ => Err(unexpected()),
    }
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let expense_id = parse_expense_id(&id)?;

    match ExpensesProcessorInput::Delete(expense_id).process(&app_config)? {
        ExpensesProcessorOutput::Delete(message) => Ok(Json(MessageResponse::new(message))),
        _ => Err(unexpected()),
    }
}

/// GET /api/expenses/summary - Total and per-category totals
pub async fn get_summary(
    State(app_config): State<AppConfig>,
) -> Result<Json<ExpenseSummary>, ApiError> {
    match ExpensesProcessorInput::Summary.process(&app_config)? {
        ExpensesProcessorOutput::Summary(summary) => Ok(Json(summary)),
        _ => Err(unexpected()),
    }
}

/// GET /api/expenses/filter?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn filter_expenses(
    State(app_config): State<AppConfig>,
    Query(params): Query<DateRangeFilter>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    match ExpensesProcessorInput::Filter(params).process(&app_config)? {
        ExpensesProcessorOutput::Filter(expenses) => Ok(Json(expenses)),
        _ => Err(unexpected()),
    }
}

/// GET /api/expenses/sorted?by=amount|date
pub async fn sort_expenses(
    State(app_config): State<AppConfig>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let key = SortKey::parse(params.by.as_deref());

    match ExpensesProcessorInput::Sorted(key).process(&app_config)? {
        ExpensesProcessorOutput::Sorted(expenses) => Ok(Json(expenses)),
        _ => Err(unexpected()),
    }
}

/// POST /api/expenses/backup - Copy the data file to the backup location
pub async fn backup_expenses(
    State(app_config): State<AppConfig>,
) -> Result<Json<MessageResponse>, ApiError> {
    match ExpensesProcessorInput::Backup.process(&app_config)? {
        ExpensesProcessorOutput::Backup(message) => Ok(Json(MessageResponse::new(message))),
        _ => Err(unexpected()),
    }
}

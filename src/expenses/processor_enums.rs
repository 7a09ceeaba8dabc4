use serde::{Deserialize, Serialize};

use crate::expenses::db_types::{
    CreateExpenseInput, DateRangeFilter, Expense, ExpenseSummary, SortKey, UpdateExpenseInput,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ExpensesProcessorInput {
    List,
    Add(CreateExpenseInput),
    Update(u64, UpdateExpenseInput),
    Delete(u64),
    Summary,
    Filter(DateRangeFilter),
    Sorted(SortKey),
    Backup,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ExpensesProcessorOutput {
    List(Vec<Expense>),
    Add(Expense),
    Update(Expense),
    Delete(String),
    Summary(ExpenseSummary),
    Filter(Vec<Expense>),
    Sorted(Vec<Expense>),
    Backup(String),
}

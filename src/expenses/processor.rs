use crate::{
    error::StoreResult,
    expenses::{
        operations::{
            add_expense, backup_expenses, delete_expense, get_filtered, get_sorted, get_summary,
            list_expenses, update_expense,
        },
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput},
    },
    utils::{app_config::AppConfig, traits::ActionProcessor},
};

impl ActionProcessor<ExpensesProcessorOutput> for ExpensesProcessorInput {
    fn process(&self, app_config: &AppConfig) -> StoreResult<ExpensesProcessorOutput> {
        let storage = app_config.storage.as_ref();

        match self {
            ExpensesProcessorInput::List => {
                Ok(ExpensesProcessorOutput::List(list_expenses(storage)?))
            }
            ExpensesProcessorInput::Add(args) => {
                let expense = add_expense(storage, args.clone())?;
                Ok(ExpensesProcessorOutput::Add(expense))
            }
            ExpensesProcessorInput::Update(id, args) => {
                let expense = update_expense(storage, *id, args.clone())?;
                Ok(ExpensesProcessorOutput::Update(expense))
            }
            ExpensesProcessorInput::Delete(id) => {
                Ok(ExpensesProcessorOutput::Delete(delete_expense(storage, *id)?))
            }
            ExpensesProcessorInput::Summary => {
                Ok(ExpensesProcessorOutput::Summary(get_summary(storage)?))
            }
            ExpensesProcessorInput::Filter(filter) => {
                Ok(ExpensesProcessorOutput::Filter(get_filtered(storage, filter)?))
            }
            ExpensesProcessorInput::Sorted(key) => {
                Ok(ExpensesProcessorOutput::Sorted(get_sorted(storage, *key)?))
            }
            ExpensesProcessorInput::Backup => {
                Ok(ExpensesProcessorOutput::Backup(backup_expenses(storage)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::db_types::{CreateExpenseInput, SortKey};
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_add_then_sorted_through_processor() {
        let app_config = AppConfig::new(Arc::new(MemoryStorage::new()));

        for (amount, date) in [(30, "2024-01-03"), (10, "2024-01-01")] {
            let input = ExpensesProcessorInput::Add(CreateExpenseInput {
                amount: Some(json!(amount)),
                date: Some(date.to_string()),
                note: Some("item".to_string()),
                category: None,
            });
            assert!(matches!(
                input.process(&app_config).unwrap(),
                ExpensesProcessorOutput::Add(_)
            ));
        }

        match ExpensesProcessorInput::Sorted(SortKey::Amount)
            .process(&app_config)
            .unwrap()
        {
            ExpensesProcessorOutput::Sorted(expenses) => {
                let amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();
                assert_eq!(amounts, vec![10.0, 30.0]);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_input_deserializes_from_tagged_json() {
        let input: ExpensesProcessorInput =
            serde_json::from_value(json!({ "Delete": 3 })).unwrap();
        assert!(matches!(input, ExpensesProcessorInput::Delete(3)));
    }
}

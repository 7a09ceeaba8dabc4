use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single stored expense record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub amount: f64,
    pub date: String,
    pub note: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Body of a create request.
///
/// Fields are optional here so that a missing field is reported as such
/// rather than as a JSON shape error. `amount` is kept raw since browsers
/// send it as a string.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: Option<Value>,
    pub date: Option<String>,
    pub note: Option<String>,
    pub category: Option<String>,
}

/// Body of an update request; only the fields present are applied.
///
/// `amount`, `date` and `note` keep an explicit `null` apart from an absent
/// key, so `{"note": null}` is validated (and rejected) instead of ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub note: Option<Option<String>>,
    pub category: Option<String>,
}

/// Wrap any present value, `null` included, in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DateRangeFilter {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Amount,
    #[default]
    Date,
}

impl SortKey {
    /// "amount" sorts by amount; anything else falls back to date
    pub fn parse(by: Option<&str>) -> Self {
        match by {
            Some("amount") => SortKey::Amount,
            _ => SortKey::Date,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// True iff `text` is a real calendar date written exactly as `YYYY-MM-DD`.
pub fn validate_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    // chrono accepts unpadded fields and signs, so pin the shape first
    let digits_only = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_only {
        return false;
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Read an amount from a JSON number or numeric string and require it to be
/// positive.
pub fn parse_amount(raw: &Value) -> StoreResult<f64> {
    let amount = match raw {
        Value::Number(n) => n.as_f64().ok_or(StoreError::InvalidAmount)?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| StoreError::InvalidAmount)?,
        _ => return Err(StoreError::InvalidAmount),
    };

    if !amount.is_finite() {
        return Err(StoreError::InvalidAmount);
    }
    if amount <= 0.0 {
        return Err(StoreError::NonPositiveAmount);
    }

    Ok(amount)
}

pub fn validate_date_field(date: &str) -> StoreResult<()> {
    if validate_date(date) {
        Ok(())
    } else {
        Err(StoreError::InvalidDate)
    }
}

pub fn validate_note(note: &str) -> StoreResult<()> {
    if note.trim().is_empty() {
        return Err(StoreError::EmptyNote);
    }
    Ok(())
}

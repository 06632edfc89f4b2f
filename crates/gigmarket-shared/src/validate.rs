//! Client-side checks run before a form is submitted.
//!
//! Only "basic required-field" rules live here; everything else is the
//! backend's business.

use crate::constants::TIMELINE_OPTIONS;
use crate::error::ValidationError;

/// Trim `value` and reject it if nothing is left.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed)
}

/// Chat text must contain something other than whitespace.
pub fn message_text(text: &str) -> Result<&str, ValidationError> {
    required("Message", text)
}

/// Parse a strictly positive decimal amount (bids, budgets, deposits).
pub fn positive_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(field, raw)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// Parse an amount that may be zero (product prices).
pub fn non_negative_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// Parse a proposal bid.
pub fn bid(raw: &str) -> Result<f64, ValidationError> {
    positive_amount("Bid", raw)
}

/// A proposal timeline must be one of [`TIMELINE_OPTIONS`].
pub fn timeline(raw: &str) -> Result<&'static str, ValidationError> {
    let trimmed = required("Timeline", raw)?;
    TIMELINE_OPTIONS
        .iter()
        .copied()
        .find(|option| *option == trimmed)
        .ok_or_else(|| ValidationError::NotAnOption {
            field: "Timeline",
            value: trimmed.to_string(),
        })
}

/// Parse the number of connects to buy: a whole number, at least one.
pub fn connects_quantity(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("Quantity"));
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n < 1 => Err(ValidationError::NotPositive("Quantity")),
        Ok(n) => u32::try_from(n).map_err(|_| ValidationError::NotANumber {
            field: "Quantity",
            value: trimmed.to_string(),
        }),
        Err(_) if trimmed.parse::<f64>().is_ok() => {
            Err(ValidationError::NotAWholeNumber("Quantity"))
        }
        Err(_) => Err(ValidationError::NotANumber {
            field: "Quantity",
            value: trimmed.to_string(),
        }),
    }
}

/// Reject a budget the wallet cannot cover, when the balance is known.
pub fn budget_within_balance(budget: f64, balance: Option<f64>) -> Result<(), ValidationError> {
    match balance {
        Some(available) if budget > available => Err(ValidationError::InsufficientBalance {
            required: budget,
            available,
        }),
        _ => Ok(()),
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

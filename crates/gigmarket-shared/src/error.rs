use thiserror::Error;

/// Client-side validation failures.
///
/// These are raised before any request leaves the process; a caller that
/// receives one knows the backend was never contacted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    #[error("{0} must be a whole number")]
    NotAWholeNumber(&'static str),

    #[error("{value:?} is not a valid {field}")]
    NotAnOption { field: &'static str, value: String },

    #[error("At least one skill is required")]
    NoSkills,

    #[error("Your balance is too low for this budget ({required:.2} > {available:.2}). Please add funds.")]
    InsufficientBalance { required: f64, available: f64 },
}

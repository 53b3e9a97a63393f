//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`ValidationError`] returned when raw input cannot become an [`Expense`],
//!   when spending exceeds a budget, or when a total does not fit in [`Money`].
//! - [`EngineError`] returned for malformed values outside the expense
//!   pipeline (money literals, currency codes).
//!
//!  [`Expense`]: super::expense::Expense
//!  [`Money`]: super::money::Money
use thiserror::Error;

use crate::Money;

/// Failures produced by the validation pipeline and budget analysis.
///
/// The `Display` output is the user-facing message.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Over budget by {0}")]
    OverBudget(Money),
    #[error("Total amount is out of range")]
    AmountOutOfRange,
}

impl ValidationError {
    /// Human-readable message carried by the error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Engine custom errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_display() {
        assert_eq!(
            ValidationError::EmptyDescription.message(),
            "Description cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidAmount.message(),
            "Amount must be a positive number"
        );
        assert_eq!(
            ValidationError::InvalidCategory("Bogus".to_string()).message(),
            "Invalid category: Bogus"
        );
        assert_eq!(
            ValidationError::OverBudget(Money::from_cents(550)).message(),
            "Over budget by 5.50"
        );
    }
}

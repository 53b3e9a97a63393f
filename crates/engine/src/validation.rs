//! Field validators and the expense construction pipeline.
//!
//! Every validator is a pure function from raw text to a typed value or a
//! [`ValidationError`]. [`create_expense`] chains them and stops at the first
//! failure; [`validate_all`] runs all of them and reports every failure.

use std::sync::Arc;

use crate::{Category, Expense, Money, ValidationError, categories::DEFAULT_COLOR};

type ResultValidation<T> = Result<T, ValidationError>;

/// Returns the trimmed description, rejecting blank input.
pub fn validate_description(text: &str) -> ResultValidation<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Parses a culture-invariant decimal amount that must be strictly positive.
pub fn parse_amount(text: &str) -> ResultValidation<Money> {
    text.parse::<Money>()
        .ok()
        .filter(|amount| amount.is_positive())
        .ok_or(ValidationError::InvalidAmount)
}

/// Resolves a category name against the allowed set.
///
/// The returned category carries the placeholder color.
pub fn validate_category(name: &str) -> ResultValidation<Category> {
    if Category::is_allowed(name) {
        Ok(Category::new(name, DEFAULT_COLOR))
    } else {
        Err(ValidationError::InvalidCategory(name.to_string()))
    }
}

/// Builds an [`Expense`] from raw input, failing fast.
///
/// Description, amount and category are checked in that order; once a step
/// fails the remaining validators are never called.
pub fn create_expense(
    description: &str,
    amount_text: &str,
    category_name: &str,
) -> ResultValidation<Expense> {
    validate_description(description)
        .and_then(|description| parse_amount(amount_text).map(|amount| (description, amount)))
        .and_then(|(description, amount)| {
            validate_category(category_name)
                .map(|category| Expense::new(description, amount, Arc::new(category)))
        })
        .inspect_err(|err| tracing::debug!(%err, "expense rejected"))
}

/// Builds an [`Expense`] from raw input, collecting every failure.
///
/// Errors are reported in field order: description, amount, category.
pub fn validate_all(
    description: &str,
    amount_text: &str,
    category_name: &str,
) -> Result<Expense, Vec<ValidationError>> {
    match (
        validate_description(description),
        parse_amount(amount_text),
        validate_category(category_name),
    ) {
        (Ok(description), Ok(amount), Ok(category)) => {
            Ok(Expense::new(description, amount, Arc::new(category)))
        }
        (description, amount, category) => {
            let errors: Vec<ValidationError> = [
                description.err(),
                amount.err(),
                category.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            tracing::debug!(count = errors.len(), "expense rejected");
            Err(errors)
        }
    }
}

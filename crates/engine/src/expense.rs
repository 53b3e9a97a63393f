//! The module contains the `Expense` type and its derived `ExpenseSummary`.
use core::fmt;
use std::{collections::BTreeSet, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, Money, ValidationError};

/// A single validated spending record.
///
/// The category is shared: expenses built from the same `Arc<Category>` point
/// at one value, while equality still compares categories structurally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub amount: Money,
    pub description: String,
    pub date: DateTime<Utc>,
    pub category: Arc<Category>,
}

impl Expense {
    /// Builds an expense with a fresh id and the current timestamp.
    ///
    /// No validation happens here; see [`crate::create_expense`].
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Arc<Category>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            date: Utc::now(),
            category,
        }
    }

    pub fn category_name(&self) -> &str {
        &self.category.name
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.description, self.amount, self.category)
    }
}

/// Aggregate figures over a set of expenses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: Money,
    pub count: usize,
    pub categories: BTreeSet<String>,
}

impl ExpenseSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Result<Self, ValidationError> {
        Ok(Self {
            total: total_amount(expenses)?,
            count: expenses.len(),
            categories: expenses
                .iter()
                .map(|expense| expense.category.name.clone())
                .collect(),
        })
    }
}

/// Sum of every amount, failing when the total does not fit in [`Money`].
pub fn total_amount(expenses: &[Expense]) -> Result<Money, ValidationError> {
    Money::checked_sum(expenses.iter().map(|expense| expense.amount))
        .ok_or(ValidationError::AmountOutOfRange)
}

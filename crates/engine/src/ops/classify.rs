//! Per-expense labels: category kind and spending priority.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{CategoryKind, Expense, Money};

/// Spending priority derived from an amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Priority {
    /// Tier boundaries are exclusive: exactly 100 is `Medium`, not `High`.
    pub fn of(amount: Money) -> Self {
        match amount {
            a if a > Money::from_units(100) => Self::High,
            a if a > Money::from_units(50) => Self::Medium,
            a if a > Money::from_units(20) => Self::Low,
            _ => Self::VeryLow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense together with its derived labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified<'a> {
    pub expense: &'a Expense,
    pub kind: CategoryKind,
    pub priority: Priority,
}

/// Labels every expense, keeping input order.
pub fn classify(expenses: &[Expense]) -> Vec<Classified<'_>> {
    expenses
        .iter()
        .map(|expense| Classified {
            expense,
            kind: expense.category.kind(),
            priority: Priority::of(expense.amount),
        })
        .collect()
}

/// Like [`classify`], ordered by kind label ascending then priority label
/// descending. Both orderings compare the label text, not the tier rank.
pub fn classify_sorted(expenses: &[Expense]) -> Vec<Classified<'_>> {
    let mut classified = classify(expenses);
    classified.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| b.priority.as_str().cmp(a.priority.as_str()))
    });
    classified
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::Category;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            "item",
            Money::from_cents(cents),
            Arc::new(Category::new(category, "#000000")),
        )
    }

    #[test]
    fn priority_boundaries_are_exclusive() {
        assert_eq!(Priority::of(Money::from_cents(10001)), Priority::High);
        assert_eq!(Priority::of(Money::from_cents(10000)), Priority::Medium);
        assert_eq!(Priority::of(Money::from_cents(5001)), Priority::Medium);
        assert_eq!(Priority::of(Money::from_cents(5000)), Priority::Low);
        assert_eq!(Priority::of(Money::from_cents(2001)), Priority::Low);
        assert_eq!(Priority::of(Money::from_cents(2000)), Priority::VeryLow);
        assert_eq!(Priority::of(Money::from_cents(1)), Priority::VeryLow);
    }

    #[test]
    fn classify_keeps_order() {
        let expenses = vec![
            expense(2550, "Food"),
            expense(12000, "Shopping"),
            expense(900, "Rent"),
        ];
        let labels: Vec<(CategoryKind, Priority)> = classify(&expenses)
            .iter()
            .map(|c| (c.kind, c.priority))
            .collect();
        assert_eq!(
            labels,
            vec![
                (CategoryKind::Essential, Priority::Low),
                (CategoryKind::Luxury, Priority::High),
                (CategoryKind::Other, Priority::VeryLow),
            ]
        );
    }

    #[test]
    fn sorted_uses_label_text() {
        let expenses = vec![
            expense(12000, "Shopping"),
            expense(4500, "Entertainment"),
            expense(1500, "Transport"),
            expense(2550, "Food"),
            expense(7000, "Food"),
            expense(500, "Rent"),
        ];
        let labels: Vec<(&str, &str)> = classify_sorted(&expenses)
            .iter()
            .map(|c| (c.kind.as_str(), c.priority.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Essential", "Very Low"),
                ("Essential", "Medium"),
                ("Essential", "Low"),
                ("Luxury", "Low"),
                ("Luxury", "High"),
                ("Other", "Very Low"),
            ]
        );
    }
}

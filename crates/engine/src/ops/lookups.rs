//! Lookups that model "not found" as `None`.

use crate::{Category, Expense, Money};

/// First expense, in slice order, whose amount is strictly above `threshold`.
pub fn find_expensive(expenses: &[Expense], threshold: Money) -> Option<&Expense> {
    expenses.iter().find(|expense| expense.amount > threshold)
}

/// Category with exactly the given name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.name == name)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn expenses(amounts: &[i64]) -> Vec<Expense> {
        let food = Arc::new(Category::new("Food", "#FF6B6B"));
        amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| {
                Expense::new(
                    format!("item {i}"),
                    Money::from_cents(*cents),
                    Arc::clone(&food),
                )
            })
            .collect()
    }

    #[test]
    fn finds_first_above_threshold() {
        let expenses = expenses(&[2550, 1500, 4500, 12000]);
        let found = find_expensive(&expenses, Money::from_units(100)).unwrap();
        assert_eq!(found.amount, Money::from_cents(12000));

        let found = find_expensive(&expenses, Money::from_units(20)).unwrap();
        assert_eq!(found.description, "item 0");
    }

    #[test]
    fn threshold_is_exclusive() {
        let expenses = expenses(&[10000]);
        assert!(find_expensive(&expenses, Money::from_units(100)).is_none());
        assert!(find_expensive(&[], Money::ZERO).is_none());
    }

    #[test]
    fn category_lookup_is_exact() {
        let categories = vec![
            Category::new("Food", "#FF6B6B"),
            Category::new("Transport", "#4ECDC4"),
        ];
        assert_eq!(
            find_category(&categories, "Transport").map(|c| c.color.as_str()),
            Some("#4ECDC4")
        );
        assert!(find_category(&categories, "transport").is_none());
        assert!(find_category(&categories, "Travel").is_none());
    }
}

//! Filtering and grouping over expense slices.

use crate::{Currency, Expense, Money, ValidationError};

/// Formats every expense above `threshold` as `"<description>: <amount>"`,
/// keeping input order.
pub fn describe_above(
    expenses: &[Expense],
    threshold: Money,
    currency: Currency,
) -> Vec<String> {
    expenses
        .iter()
        .filter(|expense| expense.amount > threshold)
        .map(|expense| {
            format!(
                "{}: {}",
                expense.description,
                expense.amount.format(currency)
            )
        })
        .collect()
}

/// Total spent per category name, largest total first.
///
/// Categories with equal totals keep the order in which they first appear in
/// `expenses`. Fails if a category total does not fit in [`Money`].
pub fn totals_by_category(
    expenses: &[Expense],
) -> Result<Vec<(String, Money)>, ValidationError> {
    let mut totals = expenses.iter().try_fold(
        Vec::<(String, Money)>::new(),
        |mut groups, expense| -> Result<_, ValidationError> {
            match groups
                .iter_mut()
                .find(|(name, _)| name.as_str() == expense.category_name())
            {
                Some((_, total)) => {
                    *total = total
                        .checked_add(expense.amount)
                        .ok_or(ValidationError::AmountOutOfRange)?;
                }
                None => groups.push((expense.category_name().to_string(), expense.amount)),
            }
            Ok(groups)
        },
    )?;
    // `sort_by` is stable, so ties stay in first-seen order.
    totals.sort_by(|(_, a), (_, b)| b.cmp(a));
    Ok(totals)
}

use crate::{Expense, Money, ValidationError, total_amount};

/// Flat tax rate applied by [`estimate_tax`], in percent.
pub const TAX_RATE_PERCENT: u32 = 10;

/// Estimated tax on the total spent.
///
/// `Ok(None)` means there is nothing to tax. A total that does not fit in
/// [`Money`] is an error rather than a missing estimate.
pub fn estimate_tax(expenses: &[Expense]) -> Result<Option<Money>, ValidationError> {
    (!expenses.is_empty())
        .then_some(expenses)
        .map(|expenses| {
            total_amount(expenses).and_then(|total| {
                total
                    .percent(TAX_RATE_PERCENT)
                    .ok_or(ValidationError::AmountOutOfRange)
            })
        })
        .transpose()
}

//! Budget versus spend comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Currency, Expense, Money, ValidationError, total_amount};

/// Remaining amount under which a budget is reported as close to its limit.
pub const WARNING_MARGIN: Money = Money::new(Decimal::ONE_HUNDRED);

/// How much room is left once spending is taken out of a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// `0 <= remaining < WARNING_MARGIN`
    NearLimit,
    /// `remaining >= WARNING_MARGIN`
    Comfortable,
}

/// Successful outcome of [`analyze_budget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub status: BudgetStatus,
}

impl BudgetReport {
    pub fn message(&self, currency: Currency) -> String {
        match self.status {
            BudgetStatus::NearLimit => format!(
                "Warning: close to budget limit. Remaining: {}",
                self.remaining.format(currency)
            ),
            BudgetStatus::Comfortable => format!(
                "Within budget. Remaining: {}",
                self.remaining.format(currency)
            ),
        }
    }
}

/// Compares total spending against `budget`.
///
/// Spending past the budget is an error carrying the overage. Totals that do
/// not fit in [`Money`] fail with `AmountOutOfRange`.
pub fn analyze_budget(
    expenses: &[Expense],
    budget: Money,
) -> Result<BudgetReport, ValidationError> {
    let spent = total_amount(expenses)?;
    let remaining = budget
        .checked_sub(spent)
        .ok_or(ValidationError::AmountOutOfRange)?;
    tracing::debug!(%budget, %spent, %remaining, "budget analyzed");

    let status = match remaining {
        r if r.is_negative() => return Err(ValidationError::OverBudget(r.abs())),
        r if r < WARNING_MARGIN => BudgetStatus::NearLimit,
        _ => BudgetStatus::Comfortable,
    };

    Ok(BudgetReport {
        budget,
        spent,
        remaining,
        status,
    })
}

//! Expense domain engine.
//!
//! Raw input becomes an [`Expense`] through the validation pipeline in
//! [`validation`]; the [`ops`] module holds the lookups and reports computed
//! from expense slices. Money is always [`Money`].

pub use categories::{ALLOWED_CATEGORIES, Category, CategoryKind, DEFAULT_COLOR};
pub use currency::Currency;
pub use error::{EngineError, ValidationError};
pub use expense::{Expense, ExpenseSummary, total_amount};
pub use money::Money;
pub use ops::{
    BudgetReport, BudgetStatus, Classified, Priority, TAX_RATE_PERCENT, WARNING_MARGIN,
    analyze_budget, classify, classify_sorted, describe_above, estimate_tax, find_category,
    find_expensive, totals_by_category,
};
pub use validation::{
    create_expense, parse_amount, validate_all, validate_category, validate_description,
};

mod categories;
mod currency;
mod error;
mod expense;
mod money;
pub mod ops;
pub mod validation;

type ResultEngine<T> = Result<T, EngineError>;

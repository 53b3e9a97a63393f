//! Pure operations over borrowed expense slices.
//!
//! Nothing here mutates its input, so every operation can run against the same
//! data in any order.

mod aggregates;
mod budget;
mod classify;
mod lookups;
mod tax;

pub use aggregates::{describe_above, totals_by_category};
pub use budget::{BudgetReport, BudgetStatus, WARNING_MARGIN, analyze_budget};
pub use classify::{Classified, Priority, classify, classify_sorted};
pub use lookups::{find_category, find_expensive};
pub use tax::{TAX_RATE_PERCENT, estimate_tax};

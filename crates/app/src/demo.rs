//! Demo sections printed by the binary.
//!
//! Each section renders to lines so the output can be checked without
//! capturing stdout.

use std::sync::Arc;

use engine::{
    Category, Expense, ExpenseSummary, Money, TAX_RATE_PERCENT, analyze_budget, classify,
    classify_sorted, create_expense, describe_above, estimate_tax, find_category,
    find_expensive, totals_by_category, validate_all,
};

use crate::settings::DemoParams;

/// Raw inputs fed to the validation sections: description, amount, category.
const RAW_INPUTS: [(&str, &str, &str); 5] = [
    ("Coffee", "5.50", "Food"),
    ("", "10.00", "Food"),
    ("Taxi", "-3.00", "Transport"),
    ("Concert", "60.00", "Music"),
    ("", "-10.00", "Bogus"),
];

pub struct Demo {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    params: DemoParams,
}

type Section = (&'static str, fn(&Demo) -> Vec<String>);

const SECTIONS: [Section; 10] = [
    ("Option: finding values", Demo::lookups),
    ("Result: validating input", Demo::validation),
    ("Fail fast vs. collect all errors", Demo::accumulate),
    ("Filter, map, collect", Demo::filtered),
    ("Group and total", Demo::grouped),
    ("Classification", Demo::classified),
    ("Sorted classification", Demo::classified_sorted),
    ("Summary", Demo::summary),
    ("Budget analysis", Demo::budgets),
    ("Tax estimation", Demo::tax),
];

impl Demo {
    pub fn new(params: DemoParams) -> Self {
        let categories = vec![
            Category::new("Food", "#FF6B6B"),
            Category::new("Transport", "#4ECDC4"),
            Category::new("Entertainment", "#45B7D1"),
            Category::new("Shopping", "#96CEB4"),
        ];
        let shared: Vec<Arc<Category>> = categories.iter().cloned().map(Arc::new).collect();
        let expenses = [
            ("Coffee", 2550, 0),
            ("Bus ticket", 1500, 1),
            ("Movie night", 4500, 2),
            ("New shoes", 12000, 3),
        ]
        .into_iter()
        .map(|(description, cents, category)| {
            Expense::new(description, Money::from_cents(cents), Arc::clone(&shared[category]))
        })
        .collect();

        Self {
            categories,
            expenses,
            params,
        }
    }

    /// Prints every section in order.
    pub fn run(&self) {
        for (title, section) in SECTIONS {
            tracing::info!(section = title, "running demo section");
            println!("=== {title} ===");
            for line in section(self) {
                println!("{line}");
            }
            println!();
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format(self.params.currency)
    }

    fn lookups(&self) -> Vec<String> {
        let threshold = self.params.lookup_threshold;
        let expensive = find_expensive(&self.expenses, threshold)
            .map(|expense| {
                format!(
                    "First expense over {}: {} ({})",
                    self.money(threshold),
                    expense.description,
                    self.money(expense.amount)
                )
            })
            .unwrap_or_else(|| format!("No expense over {}", self.money(threshold)));

        let categories = ["Food", "Travel"].into_iter().map(|name| {
            find_category(&self.categories, name)
                .map(|category| format!("Category {name}: color {}", category.color))
                .unwrap_or_else(|| format!("Category {name}: not found"))
        });

        std::iter::once(expensive).chain(categories).collect()
    }

    fn validation(&self) -> Vec<String> {
        RAW_INPUTS
            .iter()
            .map(|(description, amount, category)| {
                match create_expense(description, amount, category) {
                    Ok(expense) => format!(
                        "Created: {} {} [{}]",
                        expense.description,
                        self.money(expense.amount),
                        expense.category
                    ),
                    Err(err) => format!("Error: {err}"),
                }
            })
            .collect()
    }

    fn accumulate(&self) -> Vec<String> {
        let (description, amount, category) = RAW_INPUTS[4];
        let fail_fast = create_expense(description, amount, category)
            .err()
            .map(|err| format!("Fail fast: {err}"));
        let collected = validate_all(description, amount, category)
            .err()
            .into_iter()
            .flatten()
            .map(|err| format!("Collected: {err}"));

        fail_fast.into_iter().chain(collected).collect()
    }

    fn filtered(&self) -> Vec<String> {
        let threshold = self.params.threshold;
        std::iter::once(format!("Expenses over {}:", self.money(threshold)))
            .chain(
                describe_above(&self.expenses, threshold, self.params.currency)
                    .into_iter()
                    .map(|line| format!("  {line}")),
            )
            .collect()
    }

    fn grouped(&self) -> Vec<String> {
        match totals_by_category(&self.expenses) {
            Ok(totals) => totals
                .into_iter()
                .map(|(name, total)| format!("{name}: {}", self.money(total)))
                .collect(),
            Err(err) => vec![format!("Error: {err}")],
        }
    }

    fn classified(&self) -> Vec<String> {
        classify(&self.expenses)
            .into_iter()
            .map(|c| {
                format!(
                    "{}: {} / {} priority",
                    c.expense.description, c.kind, c.priority
                )
            })
            .collect()
    }

    fn classified_sorted(&self) -> Vec<String> {
        classify_sorted(&self.expenses)
            .into_iter()
            .map(|c| {
                format!(
                    "{} | {} | {} ({})",
                    c.kind,
                    c.priority,
                    c.expense.description,
                    self.money(c.expense.amount)
                )
            })
            .collect()
    }

    fn summary(&self) -> Vec<String> {
        let summary = match ExpenseSummary::from_expenses(&self.expenses) {
            Ok(summary) => summary,
            Err(err) => return vec![format!("Error: {err}")],
        };
        let categories: Vec<&str> = summary.categories.iter().map(String::as_str).collect();
        vec![
            format!("Total: {}", self.money(summary.total)),
            format!("Count: {}", summary.count),
            format!("Categories: {}", categories.join(", ")),
        ]
    }

    fn budgets(&self) -> Vec<String> {
        self.params
            .budgets
            .iter()
            .map(|budget| {
                let outcome = match analyze_budget(&self.expenses, *budget) {
                    Ok(report) => report.message(self.params.currency),
                    Err(err) => format!("Error: {err}"),
                };
                format!("Budget {}: {outcome}", self.money(*budget))
            })
            .collect()
    }

    fn tax(&self) -> Vec<String> {
        let describe = |label: &str, expenses: &[Expense]| match estimate_tax(expenses) {
            Ok(Some(tax)) => format!(
                "{label}: estimated tax ({TAX_RATE_PERCENT}%) {}",
                self.money(tax)
            ),
            Ok(None) => format!("{label}: no expenses"),
            Err(err) => format!("{label}: Error: {err}"),
        };
        vec![
            describe("Sample expenses", &self.expenses),
            describe("Empty list", &[]),
        ]
    }
}

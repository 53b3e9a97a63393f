//! Expense categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Category names accepted by the validation pipeline.
pub const ALLOWED_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Shopping"];

/// Placeholder color assigned to categories built from raw input.
pub const DEFAULT_COLOR: &str = "#000000";

/// A named spending bucket with a display color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Whether `name` belongs to [`ALLOWED_CATEGORIES`]. Matching is exact.
    pub fn is_allowed(name: &str) -> bool {
        ALLOWED_CATEGORIES.contains(&name)
    }

    pub fn kind(&self) -> CategoryKind {
        CategoryKind::of(&self.name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Coarse classification of a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Essential,
    Luxury,
    Other,
}

impl CategoryKind {
    pub fn of(name: &str) -> Self {
        match name {
            "Food" | "Transport" => Self::Essential,
            "Entertainment" | "Shopping" => Self::Luxury,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Luxury => "Luxury",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_names_are_case_sensitive() {
        assert!(Category::is_allowed("Food"));
        assert!(Category::is_allowed("Shopping"));
        assert!(!Category::is_allowed("food"));
        assert!(!Category::is_allowed("Rent"));
    }

    #[test]
    fn kinds_follow_category_name() {
        assert_eq!(CategoryKind::of("Food"), CategoryKind::Essential);
        assert_eq!(CategoryKind::of("Transport"), CategoryKind::Essential);
        assert_eq!(CategoryKind::of("Entertainment"), CategoryKind::Luxury);
        assert_eq!(CategoryKind::of("Shopping"), CategoryKind::Luxury);
        assert_eq!(CategoryKind::of("Rent"), CategoryKind::Other);
        assert_eq!(Category::new("Food", "#FF6B6B").kind(), CategoryKind::Essential);
    }
}

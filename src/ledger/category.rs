/// One entry of the fixed expense-category catalog.
///
/// The catalog only drives labeling and chart coloring; calculations key
/// on the raw category string so unknown keys degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub display_name: &'static str,
    pub color: &'static str,
}

/// Category assigned to every income record.
pub const INCOME_CATEGORY: &str = "salary";

/// Expense category whose total feeds the debt-ratio metric.
pub const DEBT_CATEGORY: &str = "debt";

/// Fallback color token for categories missing from the catalog.
pub const UNKNOWN_CATEGORY_COLOR: &str = "#999";

pub const EXPENSE_CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: "food", display_name: "Food", color: "#FF8042" },
    CategoryInfo { key: "housing", display_name: "Housing", color: "#0088FE" },
    CategoryInfo { key: "transport", display_name: "Transport", color: "#00C49F" },
    CategoryInfo { key: "utilities", display_name: "Utilities", color: "#FFBB28" },
    CategoryInfo { key: "entertainment", display_name: "Entertainment", color: "#A28DFF" },
    CategoryInfo { key: "health", display_name: "Health", color: "#FF6B6B" },
    CategoryInfo { key: "education", display_name: "Education", color: "#4ECDC4" },
    CategoryInfo { key: DEBT_CATEGORY, display_name: "Debt Payments", color: "#C44E4E" },
    CategoryInfo { key: "other", display_name: "Other", color: "#95A5A6" },
];

/// Looks up a catalog entry by key.
pub fn category_info(key: &str) -> Option<&'static CategoryInfo> {
    EXPENSE_CATEGORIES.iter().find(|info| info.key == key)
}

/// Display label for a category key, falling back to the raw key.
pub fn display_name(key: &str) -> &str {
    category_info(key).map(|info| info.display_name).unwrap_or(key)
}

/// Chart color token for a category key.
pub fn color(key: &str) -> &'static str {
    category_info(key)
        .map(|info| info.color)
        .unwrap_or(UNKNOWN_CATEGORY_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debt_category_is_in_catalog() {
        assert!(category_info(DEBT_CATEGORY).is_some());
    }

    #[test]
    fn unknown_key_falls_back_to_raw_key() {
        assert_eq!(display_name("crypto"), "crypto");
        assert_eq!(color("crypto"), UNKNOWN_CATEGORY_COLOR);
    }

    #[test]
    fn known_key_resolves_display_name() {
        assert_eq!(display_name("food"), "Food");
    }
}

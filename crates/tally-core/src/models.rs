//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Acquisition cost per unit.
    pub cost_price: f64,
    /// Price charged per unit.
    pub selling_price: f64,
    /// Units on hand. Never negative; sale fulfillment floors at zero.
    pub stock: u32,
    /// Free-text grouping label (e.g. "Electronics", "Apparel").
    pub category: String,
    /// Optional image reference for the catalog.
    pub image: Option<String>,
}

impl Product {
    /// Profit earned per unit at current prices.
    pub fn unit_profit(&self) -> f64 {
        self.selling_price - self.cost_price
    }
}

/// Input for creating a product; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock: u32,
    pub category: String,
    pub image: Option<String>,
}

/// A completed sale transaction.
///
/// Uses the snapshot pattern: `product_name`, `total_amount`, and `profit`
/// are frozen at sale time, so later changes to the product (or its
/// deletion) never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    /// Reference by value; the product may no longer exist.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: u32,
    /// selling_price × quantity at time of sale (frozen).
    pub total_amount: f64,
    /// (selling_price − cost_price) × quantity at time of sale (frozen).
    pub profit: f64,
    pub date: DateTime<Utc>,
}

/// A business expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: DateTime<Utc>,
}

/// Input for creating an expense; the store assigns id and date.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

/// Fixed expense category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Operations,
    Marketing,
    Infrastructure,
    Logistics,
    Taxes,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Marketing => "marketing",
            Self::Infrastructure => "infrastructure",
            Self::Logistics => "logistics",
            Self::Taxes => "taxes",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operations" => Ok(Self::Operations),
            "marketing" => Ok(Self::Marketing),
            "infrastructure" => Ok(Self::Infrastructure),
            "logistics" => Ok(Self::Logistics),
            "taxes" => Ok(Self::Taxes),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate financial statistics derived from the sale and expense ledgers.
///
/// Never persisted. Recompute via [`crate::stats::compute_stats`] whenever
/// the underlying records change; a cached copy goes stale on the first
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessStats {
    /// Count of sale records.
    pub total_sales: usize,
    /// Sum of sale total amounts.
    pub total_revenue: f64,
    /// Gross profit: sum of per-sale profit, before expenses.
    pub total_profit: f64,
    /// Sum of expense amounts.
    pub total_expenses: f64,
    /// Gross profit minus total expenses.
    pub net_profit: f64,
    /// Net profit as a percentage of revenue; 0 when revenue is 0.
    pub margin: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_expense_category_roundtrip() {
        for category in [
            ExpenseCategory::Operations,
            ExpenseCategory::Marketing,
            ExpenseCategory::Infrastructure,
            ExpenseCategory::Logistics,
            ExpenseCategory::Taxes,
            ExpenseCategory::Other,
        ] {
            let parsed = ExpenseCategory::from_str(category.as_str()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_expense_category_unknown() {
        assert!(ExpenseCategory::from_str("groceries").is_err());
    }

    #[test]
    fn test_unit_profit() {
        let product = Product {
            id: "p1".to_string(),
            name: "Desk lamp".to_string(),
            cost_price: 10.0,
            selling_price: 25.0,
            stock: 8,
            category: "General".to_string(),
            image: None,
        };
        assert!((product.unit_profit() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_default_is_all_zero() {
        let stats = BusinessStats::default();
        assert_eq!(stats.total_sales, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.margin, 0.0);
    }
}

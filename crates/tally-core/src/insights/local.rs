//! Local Insight Engine - deterministic offline advisory rules
//!
//! When the remote advisory provider is unreachable (or the environment is
//! offline), advice comes from a fixed rule set over the current products
//! and stats: margin health, expense pressure, and low inventory. The same
//! inputs always produce the same output string.

use crate::models::{BusinessStats, Product};

/// Banner prepended to every locally generated advisory.
pub const OFFLINE_BANNER: &str = "OFFLINE MODE ACTIVE:\n";

/// Margin below this percentage triggers the low-margin warning.
const LOW_MARGIN_PCT: f64 = 20.0;

/// Margin above this percentage triggers the high-margin message.
/// Margins in [20, 40] trigger neither branch.
const HIGH_MARGIN_PCT: f64 = 40.0;

/// Expense-to-revenue ratio above this percentage triggers the expense warning.
const EXPENSE_RATIO_PCT: f64 = 30.0;

/// Stock strictly below this count (and above zero) counts as low.
const LOW_STOCK_UNITS: u32 = 5;

/// Generate the offline advisory for the given products and stats.
///
/// Rules are evaluated independently in a fixed order; each triggered rule
/// contributes one severity-tagged message. Messages are joined by blank
/// lines under the offline banner. When nothing triggers, a single
/// steady-state message is emitted instead.
pub fn local_insights(products: &[Product], stats: &BusinessStats) -> String {
    let mut insights: Vec<String> = Vec::new();

    // Margin check
    if stats.margin < LOW_MARGIN_PCT {
        insights.push(format!(
            "⚠️ Your real margin is low ({:.1}%). Consider reviewing selling prices or reducing operating costs.",
            stats.margin
        ));
    } else if stats.margin > HIGH_MARGIN_PCT {
        insights.push(
            "✅ Excellent profit margin! You have room to invest in marketing or expansion."
                .to_string(),
        );
    }

    // Expense check. Skipped entirely at zero revenue: the ratio is
    // undefined there and must not leak into the output.
    if stats.total_revenue > 0.0 {
        let expense_ratio = stats.total_expenses / stats.total_revenue * 100.0;
        if expense_ratio > EXPENSE_RATIO_PCT {
            insights.push(format!(
                "📉 Expenses take up {:.1}% of revenue. Identify unnecessary spending to protect your net profit.",
                expense_ratio
            ));
        }
    }

    // Inventory check. Zero-stock products are out of stock, not "low",
    // and are excluded from the count.
    let low_stock = products
        .iter()
        .filter(|p| p.stock > 0 && p.stock < LOW_STOCK_UNITS)
        .count();
    if low_stock > 0 {
        insights.push(format!(
            "📦 Inventory alert: {} products are critically low on stock (fewer than 5 units). Restock to avoid losing sales.",
            low_stock
        ));
    }

    // Steady-state message when no rule fired
    if insights.is_empty() {
        insights.push(
            "🚀 The business is balanced. Keep up the sales pace and the strict record keeping."
                .to_string(),
        );
    }

    format!("{}{}", OFFLINE_BANNER, insights.join("\n\n"))
}

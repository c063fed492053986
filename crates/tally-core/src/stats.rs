//! Business statistics aggregation

use crate::models::{BusinessStats, Expense, Sale};

/// Compute aggregate statistics from the sale and expense ledgers.
///
/// Pure and total: empty inputs produce all-zero stats, and a zero-revenue
/// ledger yields a margin of 0 rather than a division by zero. Sales carry
/// their amounts and profits as frozen snapshots, so the fold never touches
/// product data.
pub fn compute_stats(sales: &[Sale], expenses: &[Expense]) -> BusinessStats {
    let total_revenue: f64 = sales.iter().map(|s| s.total_amount).sum();
    let total_profit: f64 = sales.iter().map(|s| s.profit).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let net_profit = total_profit - total_expenses;
    let margin = if total_revenue > 0.0 {
        net_profit / total_revenue * 100.0
    } else {
        0.0
    };

    BusinessStats {
        total_sales: sales.len(),
        total_revenue,
        total_profit,
        total_expenses,
        net_profit,
        margin,
    }
}

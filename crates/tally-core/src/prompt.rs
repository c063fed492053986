//! Advisory prompt assembly
//!
//! Builds the free-text prompt sent to the remote advisory provider: a
//! financial summary, the full product list (never truncated), and a fixed
//! instruction asking for three short pieces of strategic advice.

use crate::models::{BusinessStats, Product};

/// Persona for the provider's system instruction.
pub const ADVISOR_PERSONA: &str =
    "You are an elite business assistant called 'Tally BI'. Be direct, motivating, and professional.";

/// Render the advisory prompt for the given products and stats.
///
/// Every registered product is listed with its cost, price, and stock; the
/// provider sees the whole catalog, not a sample.
pub fn build_advisory_prompt(products: &[Product], stats: &BusinessStats) -> String {
    let product_lines = products
        .iter()
        .map(|p| {
            format!(
                "- {}: cost ${}, price ${}, stock: {}",
                p.name, p.cost_price, p.selling_price, p.stock
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "As a financial consultant for a small-business owner, analyze the following business data:\n\
         \n\
         Financial summary:\n\
         - Total revenue: ${:.2}\n\
         - Gross profit from sales: ${:.2}\n\
         - Total expenses: ${:.2}\n\
         - Real net profit: ${:.2}\n\
         - Average margin: {:.2}%\n\
         \n\
         Products ({} registered):\n\
         {}\n\
         \n\
         Provide 3 short pieces of strategic advice focused on profit optimization and expense control. Be direct.",
        stats.total_revenue,
        stats.total_profit,
        stats.total_expenses,
        stats.net_profit,
        stats.margin,
        products.len(),
        product_lines
    )
}

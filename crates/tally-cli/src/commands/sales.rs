//! Sale command implementations

use anyhow::Result;
use tally_core::RecordStore;

use super::truncate;

pub fn cmd_sales_list(store: &RecordStore, limit: usize) -> Result<()> {
    let sales = store.sales();

    if sales.is_empty() {
        println!("No sales yet. Record one with:");
        println!("  tally sales record <product-id> --quantity 2");
        return Ok(());
    }

    println!();
    println!("🧾 Recent Sales");
    println!("   ─────────────────────────────────────────────────────────────");

    // Newest last in the ledger; show the most recent `limit`
    for sale in sales.iter().rev().take(limit) {
        println!(
            "   {} │ {:>2}× {} │ \x1b[32m${:.2}\x1b[0m │ profit ${:.2}",
            sale.date.format("%Y-%m-%d"),
            sale.quantity,
            truncate(&sale.product_name, 30),
            sale.total_amount,
            sale.profit
        );
    }

    Ok(())
}

pub fn cmd_sales_record(store: &mut RecordStore, product_id: &str, quantity: u32) -> Result<()> {
    let sale = store.record_sale(product_id, quantity)?;
    let remaining = store
        .get_product(product_id)
        .map(|p| p.stock)
        .unwrap_or_default();

    println!("✅ Recorded sale {}:", sale.id);
    println!(
        "   {}× {} │ total ${:.2} │ profit ${:.2}",
        sale.quantity, sale.product_name, sale.total_amount, sale.profit
    );
    println!("   Stock remaining: {}", remaining);

    Ok(())
}

//! Product command implementations

use anyhow::Result;
use tally_core::{NewProduct, RecordStore};

use super::truncate;

pub fn cmd_products_list(store: &RecordStore) -> Result<()> {
    let products = store.products();

    if products.is_empty() {
        println!("No products yet. Add one with:");
        println!("  tally products add \"Desk lamp\" --cost 10 --price 25 --stock 8");
        return Ok(());
    }

    println!();
    println!("📦 Products");
    println!("   ─────────────────────────────────────────────────────────────");

    for product in products {
        let stock_str = if product.stock == 0 {
            "\x1b[31mout of stock\x1b[0m".to_string() // Red: nothing to sell
        } else if product.stock < 5 {
            format!("\x1b[33m{} left\x1b[0m", product.stock) // Yellow: running low
        } else {
            format!("{} left", product.stock)
        };

        println!(
            "   {} │ cost ${:.2} │ price ${:.2} │ {} │ {}",
            truncate(&product.name, 30),
            product.cost_price,
            product.selling_price,
            stock_str,
            product.id
        );
    }

    Ok(())
}

pub fn cmd_products_add(
    store: &mut RecordStore,
    name: String,
    cost: f64,
    price: f64,
    stock: u32,
    category: String,
    image: Option<String>,
) -> Result<()> {
    let product = store.add_product(NewProduct {
        name,
        cost_price: cost,
        selling_price: price,
        stock,
        category,
        image,
    })?;

    println!("✅ Added product {}:", product.id);
    println!(
        "   {} │ cost ${:.2} │ price ${:.2} │ {} in stock",
        product.name, product.cost_price, product.selling_price, product.stock
    );

    Ok(())
}

pub fn cmd_products_delete(store: &mut RecordStore, id: &str) -> Result<()> {
    let name = store
        .get_product(id)
        .map(|p| p.name.clone())
        .ok_or_else(|| anyhow::anyhow!("Product {} not found", id))?;

    store.delete_product(id)?;

    println!("✅ Deleted product \"{}\".", name);
    println!("   Its recorded sales stay in the ledger.");

    Ok(())
}

//! Tally CLI - Small-business tracker with built-in advisory
//!
//! Usage:
//!   tally products add "Desk lamp" --cost 10 --price 25 --stock 8
//!   tally sales record <product-id> --quantity 2
//!   tally expenses add "Packaging" --amount 40 --category logistics
//!   tally stats
//!   tally advise [--offline]

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store_path = commands::store_path(cli.store);

    match cli.command {
        Commands::Products { action } => {
            let mut store = commands::open_store(&store_path)?;
            match action {
                None | Some(ProductsAction::List) => commands::cmd_products_list(&store),
                Some(ProductsAction::Add {
                    name,
                    cost,
                    price,
                    stock,
                    category,
                    image,
                }) => commands::cmd_products_add(&mut store, name, cost, price, stock, category, image),
                Some(ProductsAction::Delete { id }) => commands::cmd_products_delete(&mut store, &id),
            }
        }
        Commands::Sales { action } => {
            let mut store = commands::open_store(&store_path)?;
            match action {
                None => commands::cmd_sales_list(&store, 20),
                Some(SalesAction::List { limit }) => commands::cmd_sales_list(&store, limit),
                Some(SalesAction::Record {
                    product_id,
                    quantity,
                }) => commands::cmd_sales_record(&mut store, &product_id, quantity),
            }
        }
        Commands::Expenses { action } => {
            let mut store = commands::open_store(&store_path)?;
            match action {
                None | Some(ExpensesAction::List) => commands::cmd_expenses_list(&store),
                Some(ExpensesAction::Add {
                    description,
                    amount,
                    category,
                }) => commands::cmd_expenses_add(&mut store, description, amount, &category),
                Some(ExpensesAction::Delete { id }) => commands::cmd_expenses_delete(&mut store, &id),
            }
        }
        Commands::Stats => {
            let store = commands::open_store(&store_path)?;
            commands::cmd_stats(&store)
        }
        Commands::Advise { offline } => {
            let mut store = commands::open_store(&store_path)?;
            commands::cmd_advise(&mut store, offline).await
        }
    }
}

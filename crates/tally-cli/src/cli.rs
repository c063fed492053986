//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track products, sales, and expenses, with built-in advisory
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Small-business tracker with strategic advisories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Record store path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the product catalog (list, add, delete)
    Products {
        #[command(subcommand)]
        action: Option<ProductsAction>,
    },

    /// Record and review sales
    Sales {
        #[command(subcommand)]
        action: Option<SalesAction>,
    },

    /// Manage expenses (list, add, delete)
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Show the business statistics dashboard
    Stats,

    /// Fetch a strategic advisory for the current records
    Advise {
        /// Skip the remote provider and use the local rule engine
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List registered products
    List,

    /// Add a product to the catalog
    Add {
        /// Display name
        name: String,

        /// Acquisition cost per unit
        #[arg(long)]
        cost: f64,

        /// Selling price per unit
        #[arg(long)]
        price: f64,

        /// Units on hand
        #[arg(long, default_value = "0")]
        stock: u32,

        /// Catalog category label
        #[arg(long, default_value = "General")]
        category: String,

        /// Optional image reference
        #[arg(long)]
        image: Option<String>,
    },

    /// Delete a product (historical sales are kept)
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum SalesAction {
    /// List recorded sales
    List {
        /// Maximum number of sales to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Record a sale and decrement stock
    Record {
        /// Product id
        product_id: String,

        /// Units sold
        #[arg(long, default_value = "1")]
        quantity: u32,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List registered expenses
    List,

    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount spent
        #[arg(long)]
        amount: f64,

        /// Category: operations, marketing, infrastructure, logistics, taxes, other
        #[arg(long, default_value = "other")]
        category: String,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        id: String,
    },
}

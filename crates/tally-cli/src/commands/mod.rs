//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `products` - Product catalog commands (list, add, delete)
//! - `sales` - Sale commands (list, record)
//! - `expenses` - Expense commands (list, add, delete)
//! - `status` - Stats dashboard and advisory commands

pub mod expenses;
pub mod products;
pub mod sales;
pub mod status;

// Re-export command functions for main.rs
pub use expenses::*;
pub use products::*;
pub use sales::*;
pub use status::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tally_core::RecordStore;

/// Resolve the snapshot path from the --store flag or the platform default.
pub fn store_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(RecordStore::default_path)
}

/// Open the record store, creating an empty one on first use.
pub fn open_store(path: &Path) -> Result<RecordStore> {
    RecordStore::load_or_default(path)
        .with_context(|| format!("Failed to open record store at {}", path.display()))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

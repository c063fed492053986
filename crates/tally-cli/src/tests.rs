//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use tally_core::{ExpenseCategory, NewExpense, NewProduct, RecordStore, OFFLINE_BANNER};

use crate::commands::{self, truncate};

fn seeded_store() -> RecordStore {
    let mut store = RecordStore::in_memory();
    store
        .add_product(NewProduct {
            name: "Desk lamp".to_string(),
            cost_price: 10.0,
            selling_price: 25.0,
            stock: 8,
            category: "General".to_string(),
            image: None,
        })
        .unwrap();
    store
}

// ========== Helper Tests ==========

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("lamp", 10), "lamp");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("a very long product name", 10), "a very ...");
}

#[test]
fn test_store_path_prefers_flag() {
    let flag = PathBuf::from("/tmp/custom.json");
    assert_eq!(commands::store_path(Some(flag.clone())), flag);
}

#[test]
fn test_store_path_defaults_without_flag() {
    let path = commands::store_path(None);
    assert!(path.to_string_lossy().ends_with("tally.json"));
}

#[test]
fn test_open_store_creates_empty_on_first_use() {
    let dir = tempfile::tempdir().unwrap();
    let store = commands::open_store(&dir.path().join("tally.json")).unwrap();
    assert!(store.products().is_empty());
    assert!(store.sales().is_empty());
}

// ========== Product Command Tests ==========

#[test]
fn test_cmd_products_list_empty() {
    let store = RecordStore::in_memory();
    assert!(commands::cmd_products_list(&store).is_ok());
}

#[test]
fn test_cmd_products_add_and_list() {
    let mut store = RecordStore::in_memory();
    let result = commands::cmd_products_add(
        &mut store,
        "Desk lamp".to_string(),
        10.0,
        25.0,
        8,
        "General".to_string(),
        None,
    );
    assert!(result.is_ok());
    assert_eq!(store.products().len(), 1);
    assert!(commands::cmd_products_list(&store).is_ok());
}

#[test]
fn test_cmd_products_delete_unknown_fails() {
    let mut store = RecordStore::in_memory();
    assert!(commands::cmd_products_delete(&mut store, "no-such-id").is_err());
}

// ========== Sale Command Tests ==========

#[test]
fn test_cmd_sales_record_decrements_stock() {
    let mut store = seeded_store();
    let product_id = store.products()[0].id.clone();

    let result = commands::cmd_sales_record(&mut store, &product_id, 3);
    assert!(result.is_ok());
    assert_eq!(store.sales().len(), 1);
    assert_eq!(store.get_product(&product_id).unwrap().stock, 5);
}

#[test]
fn test_cmd_sales_list_empty_and_populated() {
    let store = RecordStore::in_memory();
    assert!(commands::cmd_sales_list(&store, 20).is_ok());

    let mut store = seeded_store();
    let product_id = store.products()[0].id.clone();
    commands::cmd_sales_record(&mut store, &product_id, 1).unwrap();
    assert!(commands::cmd_sales_list(&store, 20).is_ok());
}

// ========== Expense Command Tests ==========

#[test]
fn test_cmd_expenses_add_with_category() {
    let mut store = RecordStore::in_memory();
    let result =
        commands::cmd_expenses_add(&mut store, "Packaging".to_string(), 40.0, "logistics");
    assert!(result.is_ok());
    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].category, ExpenseCategory::Logistics);
}

#[test]
fn test_cmd_expenses_add_unknown_category_fails() {
    let mut store = RecordStore::in_memory();
    let result = commands::cmd_expenses_add(&mut store, "Mystery".to_string(), 5.0, "groceries");
    assert!(result.is_err());
    assert!(store.expenses().is_empty());
}

#[test]
fn test_cmd_expenses_delete() {
    let mut store = RecordStore::in_memory();
    let expense = store
        .add_expense(NewExpense {
            description: "Packaging".to_string(),
            amount: 40.0,
            category: ExpenseCategory::Logistics,
        })
        .unwrap();

    assert!(commands::cmd_expenses_delete(&mut store, &expense.id).is_ok());
    assert!(store.expenses().is_empty());
}

// ========== Stats / Advisory Command Tests ==========

#[test]
fn test_cmd_stats_runs_on_empty_store() {
    let store = RecordStore::in_memory();
    assert!(commands::cmd_stats(&store).is_ok());
}

#[tokio::test]
async fn test_cmd_advise_offline_persists_local_insight() {
    let mut store = seeded_store();
    let product_id = store.products()[0].id.clone();
    store.record_sale(&product_id, 2).unwrap();

    let result = commands::cmd_advise(&mut store, true).await;
    assert!(result.is_ok());

    let last = store.last_insight().expect("advisory was persisted");
    assert!(last.starts_with(OFFLINE_BANNER));
}

#[tokio::test]
async fn test_cmd_advise_empty_store_does_not_persist() {
    let mut store = RecordStore::in_memory();

    let result = commands::cmd_advise(&mut store, true).await;
    assert!(result.is_ok());
    assert!(store.last_insight().is_none());
}

//! Expense command implementations

use std::str::FromStr;

use anyhow::Result;
use tally_core::{ExpenseCategory, NewExpense, RecordStore};

use super::truncate;

pub fn cmd_expenses_list(store: &RecordStore) -> Result<()> {
    let expenses = store.expenses();

    if expenses.is_empty() {
        println!("No expenses yet. Add one with:");
        println!("  tally expenses add \"Packaging\" --amount 40 --category logistics");
        return Ok(());
    }

    println!();
    println!("💸 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in expenses {
        println!(
            "   {} │ \x1b[31m${:.2}\x1b[0m │ {:<14} │ {} │ {}",
            expense.date.format("%Y-%m-%d"),
            expense.amount,
            expense.category,
            truncate(&expense.description, 30),
            expense.id
        );
    }

    Ok(())
}

pub fn cmd_expenses_add(
    store: &mut RecordStore,
    description: String,
    amount: f64,
    category: &str,
) -> Result<()> {
    let category = ExpenseCategory::from_str(category).map_err(|e| anyhow::anyhow!(e))?;

    let expense = store.add_expense(NewExpense {
        description,
        amount,
        category,
    })?;

    println!("✅ Added expense {}:", expense.id);
    println!(
        "   ${:.2} │ {} │ {}",
        expense.amount, expense.category, expense.description
    );

    Ok(())
}

pub fn cmd_expenses_delete(store: &mut RecordStore, id: &str) -> Result<()> {
    store.delete_expense(id)?;
    println!("✅ Deleted expense {}.", id);
    Ok(())
}

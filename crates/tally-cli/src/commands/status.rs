//! Stats dashboard and advisory command implementations

use anyhow::Result;
use tracing::debug;

use tally_core::{compute_stats, Advisor, Connectivity, RecordStore, EMPTY_DATA_MESSAGE};

pub fn cmd_stats(store: &RecordStore) -> Result<()> {
    let stats = compute_stats(store.sales(), store.expenses());

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Products:        {}", store.products().len());
    println!("  Sales:           {}", stats.total_sales);
    println!();
    println!("  Revenue:         ${:.2}", stats.total_revenue);
    println!("  Gross profit:    ${:.2}", stats.total_profit);
    println!("  Expenses:        ${:.2}", stats.total_expenses);
    println!("  Net profit:      ${:.2}", stats.net_profit);
    println!("  Margin:          {:.1}%", stats.margin);

    if let Some(insight) = store.last_insight() {
        println!();
        println!("  Last advisory:");
        for line in insight.lines() {
            println!("    {}", line);
        }
    }

    println!();
    Ok(())
}

pub async fn cmd_advise(store: &mut RecordStore, offline: bool) -> Result<()> {
    let connectivity = if offline {
        Connectivity::Offline
    } else {
        Connectivity::Online
    };

    let advisor = Advisor::from_env();
    let stats = compute_stats(store.sales(), store.expenses());

    println!();
    if offline {
        println!("🧭 Consulting the local insight engine...");
    } else {
        println!("🧭 Consulting your business advisor...");
    }

    let advice = advisor
        .advise(store.products(), store.sales(), &stats, connectivity)
        .await;

    println!();
    for line in advice.lines() {
        println!("   {}", line);
    }
    println!();

    // The onboarding nudge is not an advisory worth remembering
    if advice != EMPTY_DATA_MESSAGE {
        store.set_last_insight(&advice)?;
        debug!("advisory persisted as last insight");
    }

    Ok(())
}

//! Insight Orchestrator - remote advisory with deterministic fallback
//!
//! Decides, per invocation, where the advisory text comes from:
//!
//! - no data at all → a fixed onboarding message, no computation
//! - offline, or no provider configured → local rule engine
//! - otherwise → remote provider; any failure falls back to the local
//!   engine once, unconditionally
//!
//! Provider failures never escape this module. The caller always gets a
//! displayable advisory string.

use tracing::{debug, warn};

use crate::ai::{AdvisoryBackend, AdvisoryClient};
use crate::models::{BusinessStats, Product, Sale};
use crate::prompt::build_advisory_prompt;

use super::local::local_insights;

/// Message shown until any product or sale exists.
pub const EMPTY_DATA_MESSAGE: &str = "Add data to receive a personalized strategic analysis.";

/// Network state reported by the caller at invocation time.
///
/// Connectivity is an explicit parameter rather than an ambient flag; the
/// presentation layer owns observing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub const fn is_offline(&self) -> bool {
        matches!(self, Connectivity::Offline)
    }
}

/// Advisory orchestrator
///
/// Stateless between invocations: no debouncing, no caching, no retry. The
/// presentation layer owns scheduling repeated calls and persisting the
/// result.
pub struct Advisor {
    client: Option<AdvisoryClient>,
}

impl Advisor {
    /// Create an advisor with an optional provider client.
    ///
    /// Without a client every online invocation degrades to the local
    /// engine, same as offline.
    pub fn new(client: Option<AdvisoryClient>) -> Self {
        Self { client }
    }

    /// Create an advisor from environment configuration.
    pub fn from_env() -> Self {
        Self::new(AdvisoryClient::from_env())
    }

    /// Produce an advisory string for the current records.
    ///
    /// Never fails; the worst case is the local engine's output.
    pub async fn advise(
        &self,
        products: &[Product],
        sales: &[Sale],
        stats: &BusinessStats,
        connectivity: Connectivity,
    ) -> String {
        if products.is_empty() && sales.is_empty() {
            return EMPTY_DATA_MESSAGE.to_string();
        }

        if connectivity.is_offline() {
            debug!("offline, using local insight engine");
            return local_insights(products, stats);
        }

        let client = match &self.client {
            Some(client) => client,
            None => {
                debug!("no advisory backend configured, using local insight engine");
                return local_insights(products, stats);
            }
        };

        let prompt = build_advisory_prompt(products, stats);
        match client.generate_advice(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(
                    model = client.model(),
                    "provider returned empty advice, falling back to local engine"
                );
                local_insights(products, stats)
            }
            Err(e) => {
                warn!(
                    model = client.model(),
                    error = %e,
                    "provider call failed, falling back to local engine"
                );
                local_insights(products, stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockBackend;
    use crate::stats::compute_stats;
    use chrono::Utc;

    fn product(stock: u32) -> Product {
        Product {
            id: format!("p-{}", stock),
            name: "Desk lamp".to_string(),
            cost_price: 10.0,
            selling_price: 20.0,
            stock,
            category: "General".to_string(),
            image: None,
        }
    }

    fn sale() -> Sale {
        Sale {
            id: "s1".to_string(),
            product_id: "p-1".to_string(),
            product_name: "Desk lamp".to_string(),
            quantity: 2,
            total_amount: 40.0,
            profit: 20.0,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_empty_data_short_circuits_before_any_engine() {
        // Even a failing provider is never reached; neither is the local
        // engine, whose output would carry the offline banner.
        let advisor = Advisor::new(Some(AdvisoryClient::Mock(MockBackend::failing())));
        let out = advisor
            .advise(&[], &[], &BusinessStats::default(), Connectivity::Online)
            .await;
        assert_eq!(out, EMPTY_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn test_offline_routes_to_local_engine() {
        // The mock would succeed with distinctive advice; offline must not
        // consult it.
        let advisor = Advisor::new(Some(AdvisoryClient::Mock(MockBackend::with_advice(
            "remote advice that must not appear",
        ))));
        let products = vec![product(1)];
        let sales = vec![sale()];
        let stats = compute_stats(&sales, &[]);

        let out = advisor
            .advise(&products, &sales, &stats, Connectivity::Offline)
            .await;
        assert_eq!(out, local_insights(&products, &stats));
        assert!(!out.contains("remote advice"));
    }

    #[tokio::test]
    async fn test_remote_success_returned_verbatim() {
        let advisor = Advisor::new(Some(AdvisoryClient::Mock(MockBackend::with_advice(
            "1. Advice one.\n2. Advice two.\n3. Advice three.",
        ))));
        let products = vec![product(8)];
        let sales = vec![sale()];
        let stats = compute_stats(&sales, &[]);

        let out = advisor
            .advise(&products, &sales, &stats, Connectivity::Online)
            .await;
        assert_eq!(out, "1. Advice one.\n2. Advice two.\n3. Advice three.");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local_engine() {
        let advisor = Advisor::new(Some(AdvisoryClient::Mock(MockBackend::failing())));
        let products = vec![product(3)];
        let sales = vec![sale()];
        let stats = compute_stats(&sales, &[]);

        let out = advisor
            .advise(&products, &sales, &stats, Connectivity::Online)
            .await;
        assert_eq!(out, local_insights(&products, &stats));
    }

    #[tokio::test]
    async fn test_empty_remote_advice_falls_back_to_local_engine() {
        let advisor = Advisor::new(Some(AdvisoryClient::Mock(MockBackend::with_advice("  \n"))));
        let products = vec![product(3)];
        let sales = vec![sale()];
        let stats = compute_stats(&sales, &[]);

        let out = advisor
            .advise(&products, &sales, &stats, Connectivity::Online)
            .await;
        assert_eq!(out, local_insights(&products, &stats));
    }

    #[tokio::test]
    async fn test_no_client_behaves_like_offline() {
        let advisor = Advisor::new(None);
        let products = vec![product(3)];
        let sales = vec![sale()];
        let stats = compute_stats(&sales, &[]);

        let out = advisor
            .advise(&products, &sales, &stats, Connectivity::Online)
            .await;
        assert_eq!(out, local_insights(&products, &stats));
    }

    #[tokio::test]
    async fn test_products_without_sales_still_get_advice() {
        // Only one of the two collections needs data to pass the gate
        let advisor = Advisor::new(None);
        let products = vec![product(3)];
        let stats = compute_stats(&[], &[]);

        let out = advisor
            .advise(&products, &[], &stats, Connectivity::Online)
            .await;
        assert_ne!(out, EMPTY_DATA_MESSAGE);
    }
}

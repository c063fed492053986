//! Mock backend for testing
//!
//! Provides canned advice for orchestrator tests without a running
//! provider, plus failure and empty-response modes for the fallback path.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::AdvisoryBackend;

/// Mock advisory backend for testing
///
/// Returns predictable advice for every prompt. Can be configured to fail
/// or to return a specific canned response.
#[derive(Clone)]
pub struct MockBackend {
    /// Canned advice returned on success
    pub advice: String,
    /// When set, every call fails with a provider error
    pub failing: bool,
    /// Whether health_check should return true
    pub healthy: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a new mock backend (healthy, succeeding)
    pub fn new() -> Self {
        Self {
            advice: "1. Raise prices on your best sellers.\n\
                     2. Cut the two largest recurring expenses.\n\
                     3. Restock high-margin items first."
                .to_string(),
            failing: false,
            healthy: true,
        }
    }

    /// Mock that fails every call (simulates an unreachable provider)
    pub fn failing() -> Self {
        Self {
            failing: true,
            healthy: false,
            ..Self::new()
        }
    }

    /// Mock that succeeds with the given canned advice
    pub fn with_advice(advice: impl Into<String>) -> Self {
        Self {
            advice: advice.into(),
            ..Self::new()
        }
    }
}

#[async_trait]
impl AdvisoryBackend for MockBackend {
    async fn generate_advice(&self, _prompt: &str) -> Result<String> {
        if self.failing {
            return Err(Error::Provider("mock provider failure".into()));
        }
        Ok(self.advice.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}

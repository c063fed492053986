//! Pluggable advisory provider abstraction
//!
//! The remote advisory provider is an external black box reached over HTTP.
//! This module keeps it behind a small trait so the orchestrator can run
//! against the real Gemini API or a mock in tests.
//!
//! # Architecture
//!
//! - `AdvisoryBackend` trait: defines the interface for advisory generation
//! - `AdvisoryClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `ADVISOR_BACKEND`: Backend to use (gemini, mock). Default: gemini
//! - `GEMINI_API_KEY`: API key (required for the gemini backend)
//! - `GEMINI_MODEL`: Model name (default: gemini-3-flash-preview)

mod gemini;
mod mock;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for advisory providers
///
/// Backends should be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait AdvisoryBackend: Send + Sync {
    /// Generate free-text advice for the given prompt
    async fn generate_advice(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete advisory client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AdvisoryClient {
    /// Gemini backend (HTTP API)
    Gemini(GeminiBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AdvisoryClient {
    /// Create an advisory client from environment variables
    ///
    /// Checks `ADVISOR_BACKEND` to determine which backend to use:
    /// - `gemini` (default): uses GEMINI_API_KEY and GEMINI_MODEL
    /// - `mock`: creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("ADVISOR_BACKEND").unwrap_or_else(|_| "gemini".to_string());

        match backend.to_lowercase().as_str() {
            "gemini" => GeminiBackend::from_env().map(AdvisoryClient::Gemini),
            "mock" => Some(AdvisoryClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown ADVISOR_BACKEND, falling back to gemini");
                GeminiBackend::from_env().map(AdvisoryClient::Gemini)
            }
        }
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AdvisoryClient::Mock(MockBackend::new())
    }
}

// Implement AdvisoryBackend for AdvisoryClient by delegating to the inner backend
#[async_trait]
impl AdvisoryBackend for AdvisoryClient {
    async fn generate_advice(&self, prompt: &str) -> Result<String> {
        match self {
            AdvisoryClient::Gemini(b) => b.generate_advice(prompt).await,
            AdvisoryClient::Mock(b) => b.generate_advice(prompt).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AdvisoryClient::Gemini(b) => b.health_check().await,
            AdvisoryClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AdvisoryClient::Gemini(b) => b.model(),
            AdvisoryClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AdvisoryClient::Gemini(b) => b.host(),
            AdvisoryClient::Mock(b) => b.host(),
        }
    }
}

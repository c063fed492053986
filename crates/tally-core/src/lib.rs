//! Tally Core Library
//!
//! Shared functionality for the Tally small-business management tool:
//! - Domain records (products, sales, expenses) and derived statistics
//! - JSON snapshot record store with load/save at process boundaries
//! - Deterministic local insight rules for offline advisories
//! - Remote/local advisory orchestration
//! - Pluggable advisory provider backends (Gemini, mock)

pub mod ai;
pub mod error;
pub mod insights;
pub mod models;
pub mod prompt;
pub mod stats;
pub mod store;

pub use ai::{AdvisoryBackend, AdvisoryClient, GeminiBackend, MockBackend};
pub use error::{Error, Result};
pub use insights::{local_insights, Advisor, Connectivity, EMPTY_DATA_MESSAGE, OFFLINE_BANNER};
pub use models::{BusinessStats, Expense, ExpenseCategory, NewExpense, NewProduct, Product, Sale};
pub use prompt::{build_advisory_prompt, ADVISOR_PERSONA};
pub use stats::compute_stats;
pub use store::RecordStore;

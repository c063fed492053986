//! Insight generation - local advisory rules and remote/local orchestration
//!
//! - **Local engine** - deterministic rules over products and stats,
//!   used offline and as the fallback for every provider failure
//! - **Advisor** - per-invocation policy choosing between the remote
//!   provider and the local engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::{Advisor, Connectivity};
//!
//! let advisor = Advisor::from_env();
//! let advice = advisor.advise(&products, &sales, &stats, Connectivity::Online).await;
//! ```

pub mod advisor;
pub mod local;

pub use advisor::{Advisor, Connectivity, EMPTY_DATA_MESSAGE};
pub use local::{local_insights, OFFLINE_BANNER};

//! League Core
//!
//! Simulation core for a single country's league phase:
//! - Per-match performance rolls for every roster slot
//! - Squad selection and match-day scoring
//! - 3-1-0 match resolution over an all-pairs round robin
//! - Top-of-table tie-break and final ranking
//!
//! Nothing here touches the filesystem; match records flow out through the
//! [`MatchLog`] trait so callers decide where they end up.

pub mod config;
pub mod league;
pub mod outcome;
pub mod performance;
pub mod scoring;
pub mod seed;
pub mod standings;
pub mod tiebreak;
pub mod types;

pub use config::*;
pub use league::*;
pub use outcome::*;
pub use performance::*;
pub use scoring::*;
pub use seed::*;
pub use standings::*;
pub use tiebreak::*;
pub use types::*;

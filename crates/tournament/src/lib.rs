//! Multi-country tournament
//!
//! This crate provides:
//! - Country workers that each run a full league and write its artifacts
//! - The coordinator gather of every country's top two teams
//! - The qualifier report and optional JSON summary
//!
//! # Usage
//!
//! ```bash
//! # Eight countries, default league shape
//! cargo run -p tournament -- run
//!
//! # Reproducible run into ./out with a JSON summary
//! cargo run -p tournament -- run --seed 42 --out out --summary out/qualifiers.json
//! ```

pub mod artifacts;
pub mod config;
pub mod coordinator;
pub mod country;
pub mod error;
pub mod qualifiers;
pub mod runner;

pub use artifacts::*;
pub use config::*;
pub use coordinator::*;
pub use country::*;
pub use error::*;
pub use qualifiers::*;
pub use runner::*;

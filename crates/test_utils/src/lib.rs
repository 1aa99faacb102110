//! Test Utilities Crate
//!
//! Shared test infrastructure for the ledger workspace.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built cards, amounts, and dates for common scenarios
//! - `builders`: Builder patterns for creation requests
//! - `generators`: Property-based strategies and generated test strings
//! - `logging`: Opt-in tracing output for test runs

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod logging;

pub use builders::*;
pub use fixtures::*;
pub use logging::init_tracing;

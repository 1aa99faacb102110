//! Ledger Kernel - Foundational types for the personal ledger system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Monetary magnitudes with precise decimal arithmetic and an
//!   integer-cent storage boundary
//! - UTC calendar arithmetic for billing cycles and installment schedules
//! - Strongly-typed entity identifiers
//! - Port/adapter plumbing for repository boundaries

pub mod calendar;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use calendar::{add_months, days_in_month, end_of_day, first_of_month};
pub use identifiers::{CardId, TransactionId};
pub use money::{cents_to_decimal, Amount, MoneyError};
pub use ports::{DomainPort, PortError};

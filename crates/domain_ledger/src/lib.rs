//! Ledger Domain - Transactions, Billing Cycles, and Summaries
//!
//! This crate implements the core bookkeeping rules of the personal
//! ledger: the immutable transaction entity, credit-card billing-cycle
//! attribution, installment expansion, and period/card summary
//! aggregation.
//!
//! # Billing-cycle attribution
//!
//! A card purchase belongs to a statement month (its *reference date*),
//! not necessarily to the month it happened in: a purchase on or after
//! the card's closing day rolls into the next month's bill. Summaries
//! therefore group by reference date when one exists and fall back to
//! the transaction's own date otherwise.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{TransactionFactory, CreateTransactionRequest, TransactionType};
//!
//! let factory = TransactionFactory::new(card_store);
//!
//! // A 3-installment purchase expands into three transactions, one per
//! // statement month.
//! let batch = factory.create(CreateTransactionRequest {
//!     transaction_type: TransactionType::Expense,
//!     description: "New monitor".into(),
//!     amount: dec!(900),
//!     category_name: None,
//!     card_name: Some("Nubank".into()),
//!     date: None,
//!     reference_date: None,
//!     installments: Some(3),
//! }).await?;
//! ```

pub mod adapters;
pub mod card;
pub mod error;
pub mod factory;
pub mod ports;
pub mod reference_date;
pub mod services;
pub mod summary;
pub mod transaction;

pub use card::Card;
pub use error::LedgerError;
pub use factory::{CreateTransactionRequest, TransactionFactory};
pub use ports::{CardPort, SummaryQuery, TransactionPort, TransactionQuery};
pub use reference_date::ReferenceDateCalculator;
pub use services::{TransactionEntryService, TransactionQueryService, TransactionRecord};
pub use summary::TransactionSummary;
pub use transaction::{
    CreateTransactionProps, RecurrenceType, Transaction, TransactionType,
};

//! Ledger domain ports
//!
//! These traits define everything the ledger domain needs from its data
//! sources. The domain never references a concrete storage technology;
//! adapters are wired in at composition time:
//!
//! - **In-memory adapter** (this crate, [`crate::adapters::memory`]):
//!   the reference implementation of the repository semantics, used by
//!   the test suite.
//! - **Database adapter** (external): owns the SQL and the transaction
//!   commit boundary; `create_many` atomicity is its responsibility.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_ledger::{TransactionFactory, CardPort};
//!
//! let cards: Arc<dyn CardPort> = Arc::new(InMemoryCardStore::new());
//! let factory = TransactionFactory::new(cards);
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ledger_kernel::{CardId, DomainPort, PortError};
use std::collections::BTreeMap;

use crate::card::Card;
use crate::summary::TransactionSummary;
use crate::transaction::Transaction;

/// Filter for listing transactions
///
/// The period filter engages when both bounds are present; a lone bound
/// is ignored by adapters.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub card_id: Option<CardId>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl TransactionQuery {
    /// Creates a query filtered to one card
    pub fn by_card(card_id: CardId) -> Self {
        Self {
            card_id: Some(card_id),
            ..Default::default()
        }
    }

    /// Creates a query over a period
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    /// Restricts an existing query to one card
    pub fn with_card(mut self, card_id: CardId) -> Self {
        self.card_id = Some(card_id);
        self
    }
}

/// Parameters for summary aggregation; the period is mandatory here
#[derive(Debug, Clone)]
pub struct SummaryQuery {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub card_id: Option<CardId>,
}

impl SummaryQuery {
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            card_id: None,
        }
    }

    pub fn with_card(mut self, card_id: CardId) -> Self {
        self.card_id = Some(card_id);
        self
    }
}

/// Port for card lookup
#[async_trait]
pub trait CardPort: DomainPort {
    /// Finds a card by its unique name
    ///
    /// # Returns
    ///
    /// The card, or `None` when no card carries that name. Absence is
    /// not an error at this boundary; the factory decides what a
    /// missing card means.
    async fn find_by_name(&self, name: &str) -> Result<Option<Card>, PortError>;
}

/// Port for transaction persistence and read-side queries
#[async_trait]
pub trait TransactionPort: DomainPort {
    /// Persists a single transaction
    async fn create(&self, transaction: Transaction) -> Result<Transaction, PortError>;

    /// Persists an installment batch
    ///
    /// The batch commits atomically: either every installment is
    /// persisted or none is.
    async fn create_many(&self, transactions: Vec<Transaction>)
        -> Result<Vec<Transaction>, PortError>;

    /// Returns matching transactions, newest date first
    async fn find(&self, query: TransactionQuery) -> Result<Vec<Transaction>, PortError>;

    /// Returns the flat money-flow summary for the period
    async fn get_summary(&self, query: SummaryQuery) -> Result<TransactionSummary, PortError>;

    /// Returns per-card summaries, keyed by card name
    ///
    /// Only card transactions participate; cards with no matching
    /// transactions are absent from the result.
    async fn get_summary_by_card(
        &self,
        query: SummaryQuery,
    ) -> Result<BTreeMap<String, TransactionSummary>, PortError>;
}

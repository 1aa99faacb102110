//! In-memory adapters
//!
//! Reference implementations of the ledger ports. They hold entities in
//! a `tokio::sync::RwLock` and delegate all filtering and aggregation
//! to [`crate::summary`], so they define the behavior any database
//! adapter must reproduce. The test suite runs entirely on these.

use async_trait::async_trait;
use ledger_kernel::{DomainPort, PortError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::card::Card;
use crate::ports::{CardPort, SummaryQuery, TransactionPort, TransactionQuery};
use crate::summary::{self, TransactionSummary};
use crate::transaction::Transaction;

/// In-memory card lookup, seeded at construction
#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    cards: RwLock<Vec<Card>>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with cards
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }

    /// Adds a card after construction
    pub async fn insert(&self, card: Card) {
        self.cards.write().await.push(card);
    }
}

impl DomainPort for InMemoryCardStore {}

#[async_trait]
impl CardPort for InMemoryCardStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Card>, PortError> {
        let cards = self.cards.read().await;
        Ok(cards.iter().find(|card| card.name == name).cloned())
    }
}

/// In-memory transaction store
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions
    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }

    fn matches(transaction: &Transaction, query: &TransactionQuery) -> bool {
        if let Some(card_id) = query.card_id {
            if transaction.card_id() != Some(card_id) {
                return false;
            }
        }
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if !summary::in_period(transaction, start, end) {
                return false;
            }
        }
        true
    }

    fn summary_filter(query: &SummaryQuery) -> TransactionQuery {
        TransactionQuery {
            card_id: query.card_id,
            start_date: Some(query.start_date),
            end_date: Some(query.end_date),
        }
    }
}

impl DomainPort for InMemoryTransactionStore {}

#[async_trait]
impl TransactionPort for InMemoryTransactionStore {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, PortError> {
        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|t| t.id() == transaction.id()) {
            return Err(PortError::conflict(format!(
                "transaction {} already exists",
                transaction.id()
            )));
        }
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn create_many(
        &self,
        batch: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, PortError> {
        let mut transactions = self.transactions.write().await;
        // All-or-nothing: verify the whole batch before touching the store
        for transaction in &batch {
            if transactions.iter().any(|t| t.id() == transaction.id()) {
                return Err(PortError::conflict(format!(
                    "transaction {} already exists",
                    transaction.id()
                )));
            }
        }
        transactions.extend(batch.iter().cloned());
        Ok(batch)
    }

    async fn find(&self, query: TransactionQuery) -> Result<Vec<Transaction>, PortError> {
        let transactions = self.transactions.read().await;
        let mut matching: Vec<Transaction> = transactions
            .iter()
            .filter(|transaction| Self::matches(transaction, &query))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(matching)
    }

    async fn get_summary(&self, query: SummaryQuery) -> Result<TransactionSummary, PortError> {
        let filter = Self::summary_filter(&query);
        let transactions = self.transactions.read().await;
        Ok(summary::summarize(
            transactions
                .iter()
                .filter(|transaction| Self::matches(transaction, &filter)),
        ))
    }

    async fn get_summary_by_card(
        &self,
        query: SummaryQuery,
    ) -> Result<BTreeMap<String, TransactionSummary>, PortError> {
        let filter = Self::summary_filter(&query);
        let transactions = self.transactions.read().await;
        Ok(summary::summarize_by_card(
            transactions
                .iter()
                .filter(|transaction| Self::matches(transaction, &filter)),
        ))
    }
}

//! Ledger application services
//!
//! The services front the exposed contracts of the domain: recording
//! movements, listing them, and summarizing money flow. They own the
//! request-side normalization (end-of-day bounds, range ordering) so
//! adapters only ever see well-formed queries.

use chrono::{DateTime, Utc};
use ledger_kernel::calendar::end_of_day;
use ledger_kernel::{CardId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::LedgerError;
use crate::factory::{CreateTransactionRequest, TransactionFactory};
use crate::ports::{SummaryQuery, TransactionPort, TransactionQuery};
use crate::summary::TransactionSummary;
use crate::transaction::{RecurrenceType, Transaction, TransactionType};

/// Records new movements through the factory and persists them
pub struct TransactionEntryService {
    transactions: Arc<dyn TransactionPort>,
    factory: TransactionFactory,
}

impl TransactionEntryService {
    pub fn new(transactions: Arc<dyn TransactionPort>, factory: TransactionFactory) -> Self {
        Self {
            transactions,
            factory,
        }
    }

    /// Creates and persists the transactions described by the request
    ///
    /// A single movement goes through `create`, an installment batch
    /// through `create_many` so the adapter can commit it atomically.
    /// Returns the persisted entities in ascending installment order.
    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let mut batch = self.factory.create(request).await?;
        debug!(count = batch.len(), "persisting transaction batch");

        if batch.len() == 1 {
            let transaction = self.transactions.create(batch.remove(0)).await?;
            Ok(vec![transaction])
        } else {
            Ok(self.transactions.create_many(batch).await?)
        }
    }
}

/// A transaction projected for callers outside the domain
///
/// Carries every entity field and nothing else; enum values keep their
/// canonical lower-case form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub category_name: Option<String>,
    pub card_id: Option<CardId>,
    pub card_name: Option<String>,
    pub date: DateTime<Utc>,
    pub reference_date: Option<DateTime<Utc>>,
    pub recurrence_type: RecurrenceType,
    pub installment_current: u32,
    pub installment_total: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionRecord {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id(),
            transaction_type: transaction.transaction_type(),
            description: transaction.description().to_string(),
            amount: transaction.amount().as_decimal(),
            category_name: transaction.category_name().map(str::to_string),
            card_id: transaction.card_id(),
            card_name: transaction.card_name().map(str::to_string),
            date: transaction.date(),
            reference_date: transaction.reference_date(),
            recurrence_type: transaction.recurrence_type(),
            installment_current: transaction.installment_current(),
            installment_total: transaction.installment_total(),
            created_at: transaction.created_at(),
            updated_at: transaction.updated_at(),
        }
    }
}

/// Read-side queries: listing and summaries
pub struct TransactionQueryService {
    transactions: Arc<dyn TransactionPort>,
}

impl TransactionQueryService {
    pub fn new(transactions: Arc<dyn TransactionPort>) -> Self {
        Self { transactions }
    }

    /// Lists matching transactions, newest date first
    ///
    /// A date-only end bound is widened to the last instant of its day
    /// so the whole end day is included.
    pub async fn find(
        &self,
        mut query: TransactionQuery,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        if let Some(end) = query.end_date {
            query.end_date = Some(end_of_day(end));
        }
        let transactions = self.transactions.find(query).await?;
        Ok(transactions.iter().map(TransactionRecord::from).collect())
    }

    /// Flat money-flow summary over the period
    pub async fn summary(
        &self,
        query: SummaryQuery,
    ) -> Result<TransactionSummary, LedgerError> {
        let query = Self::normalize(query)?;
        debug!(start = %query.start_date, end = %query.end_date, "computing summary");
        Ok(self.transactions.get_summary(query).await?)
    }

    /// Per-card summaries over the period, keyed by card name
    pub async fn summary_by_card(
        &self,
        query: SummaryQuery,
    ) -> Result<BTreeMap<String, TransactionSummary>, LedgerError> {
        let query = Self::normalize(query)?;
        debug!(start = %query.start_date, end = %query.end_date, "computing per-card summary");
        Ok(self.transactions.get_summary_by_card(query).await?)
    }

    /// Widens the end bound to end-of-day, then rejects inverted ranges.
    /// Runs before any port call.
    fn normalize(mut query: SummaryQuery) -> Result<SummaryQuery, LedgerError> {
        query.end_date = end_of_day(query.end_date);
        if query.end_date < query.start_date {
            return Err(LedgerError::InvalidDateRange);
        }
        Ok(query)
    }
}

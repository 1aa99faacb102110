//! Summary aggregation
//!
//! Reduces a filtered set of transactions into per-type totals. Sums
//! are accumulated in integer cents and converted to decimal currency
//! units only when the summary is produced, so totals never drift
//! across many additions.
//!
//! This module is the single definition of the aggregation and
//! period-matching semantics; every repository adapter delegates here
//! so a summary means the same thing no matter which backend computed
//! it.

use chrono::{DateTime, Utc};
use ledger_kernel::cents_to_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transaction::{Transaction, TransactionType};

/// Money-flow totals over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Always `total_income - total_expense`, never summed independently
    pub balance: Decimal,
    /// Matching transactions of either type
    pub transaction_count: u64,
}

/// Integer-cent accumulator behind [`TransactionSummary`]
#[derive(Debug, Default)]
struct CentTotals {
    income_cents: i64,
    expense_cents: i64,
    count: u64,
}

impl CentTotals {
    fn record(&mut self, transaction: &Transaction) {
        let cents = transaction.amount().to_cents();
        match transaction.transaction_type() {
            TransactionType::Income => self.income_cents += cents,
            TransactionType::Expense => self.expense_cents += cents,
        }
        self.count += 1;
    }

    fn finish(self) -> TransactionSummary {
        let total_income = cents_to_decimal(self.income_cents);
        let total_expense = cents_to_decimal(self.expense_cents);
        TransactionSummary {
            balance: total_income - total_expense,
            total_income,
            total_expense,
            transaction_count: self.count,
        }
    }
}

/// Returns true if the transaction belongs to the period `[start, end]`
///
/// Billing-cycle attribution takes precedence: a transaction with a
/// reference date is matched on it, one without (no card) is matched on
/// its own date. Callers normalize `end` to end-of-day before filtering.
pub fn in_period(transaction: &Transaction, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    let effective = transaction.reference_date().unwrap_or_else(|| transaction.date());
    effective >= start && effective <= end
}

/// Reduces transactions into one flat summary
pub fn summarize<'a, I>(transactions: I) -> TransactionSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = CentTotals::default();
    for transaction in transactions {
        totals.record(transaction);
    }
    totals.finish()
}

/// Reduces card transactions into per-card summaries, keyed by card name
///
/// Transactions without a card are skipped; a card with no matching
/// transactions simply does not appear in the result (callers treat
/// absence as zero).
pub fn summarize_by_card<'a, I>(transactions: I) -> BTreeMap<String, TransactionSummary>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: BTreeMap<String, CentTotals> = BTreeMap::new();
    for transaction in transactions {
        let Some(card_name) = transaction.card_name() else {
            continue;
        };
        groups
            .entry(card_name.to_string())
            .or_default()
            .record(transaction);
    }

    groups
        .into_iter()
        .map(|(name, totals)| (name, totals.finish()))
        .collect()
}

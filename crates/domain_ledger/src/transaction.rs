//! The transaction entity
//!
//! A `Transaction` is the validated, immutable record of one ledger
//! movement. Construction through [`Transaction::create`] is the only
//! way to obtain an instance; there are no setters and no default
//! value, so an instance that exists is an instance that passed every
//! invariant.

use chrono::{DateTime, Utc};
use ledger_kernel::{Amount, CardId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Direction of a ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Canonical lower-case name, as used internally and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Whether a transaction stands alone or belongs to an installment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Single,
    Installment,
}

/// Construction properties for [`Transaction::create`]
///
/// `id`, `created_at` and `updated_at` are normally absent and
/// generated at construction; adapters supply them when rehydrating
/// persisted rows, which goes through the same validating path.
#[derive(Debug, Clone)]
pub struct CreateTransactionProps {
    pub id: Option<TransactionId>,
    pub transaction_type: TransactionType,
    pub description: String,
    /// Signed input is accepted; the stored amount is the magnitude
    pub amount: Decimal,
    pub category_name: Option<String>,
    pub card_id: Option<CardId>,
    pub card_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub reference_date: Option<DateTime<Utc>>,
    pub recurrence_type: RecurrenceType,
    pub installment_total: Option<u32>,
    pub installment_current: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One validated, immutable ledger movement
///
/// # Invariants
///
/// - `description` is non-empty after trimming
/// - `amount` is a strictly positive magnitude
/// - `single` transactions always carry installment 1 of 1
/// - `installment` transactions carry `1 <= current <= total` with
///   `total > 1`
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    transaction_type: TransactionType,
    description: String,
    amount: Amount,
    category_name: Option<String>,
    card_id: Option<CardId>,
    card_name: Option<String>,
    date: DateTime<Utc>,
    reference_date: Option<DateTime<Utc>>,
    recurrence_type: RecurrenceType,
    installment_current: u32,
    installment_total: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Validates the properties and constructs the entity
    ///
    /// Every violated invariant is collected; the resulting
    /// [`LedgerError::Validation`] message lists all of them.
    pub fn create(props: CreateTransactionProps) -> Result<Self, LedgerError> {
        let mut errors = Vec::new();

        if props.description.trim().is_empty() {
            errors.push("Description is required.".to_string());
        }

        let amount = match Amount::new(props.amount) {
            Ok(amount) => Some(amount),
            Err(_) => {
                errors.push("Amount must be greater than zero.".to_string());
                None
            }
        };

        let (installment_current, installment_total) = match props.recurrence_type {
            // Forced, not merely checked
            RecurrenceType::Single => (1, 1),
            RecurrenceType::Installment => {
                let total = props.installment_total.unwrap_or(0);
                let current = props.installment_current.unwrap_or(0);
                if total <= 1 {
                    errors.push(
                        "Installment total must be greater than 1 for installment transactions."
                            .to_string(),
                    );
                } else if current < 1 || current > total {
                    errors.push(
                        "Installment current must be a positive number and less than or equal to the total."
                            .to_string(),
                    );
                }
                (current, total)
            }
        };

        match (errors.is_empty(), amount) {
            (true, Some(amount)) => {
                let now = Utc::now();
                Ok(Self {
                    id: props.id.unwrap_or_else(TransactionId::new_v7),
                    transaction_type: props.transaction_type,
                    description: props.description,
                    amount,
                    category_name: props.category_name,
                    card_id: props.card_id,
                    card_name: props.card_name,
                    date: props.date.unwrap_or(now),
                    reference_date: props.reference_date,
                    recurrence_type: props.recurrence_type,
                    installment_current,
                    installment_total,
                    created_at: props.created_at.unwrap_or(now),
                    updated_at: props.updated_at.unwrap_or(now),
                })
            }
            _ => Err(LedgerError::validation(errors)),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    pub fn card_id(&self) -> Option<CardId> {
        self.card_id
    }

    pub fn card_name(&self) -> Option<&str> {
        self.card_name.as_deref()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// First day (UTC) of the statement month this movement is
    /// attributed to; present only for card transactions or when
    /// supplied explicitly
    pub fn reference_date(&self) -> Option<DateTime<Utc>> {
        self.reference_date
    }

    pub fn recurrence_type(&self) -> RecurrenceType {
        self.recurrence_type
    }

    pub fn installment_current(&self) -> u32 {
        self.installment_current
    }

    pub fn installment_total(&self) -> u32 {
        self.installment_total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

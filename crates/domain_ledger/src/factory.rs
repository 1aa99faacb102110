//! Transaction creation
//!
//! The factory turns one creation request into one or many validated
//! [`Transaction`] instances, resolving the card-dependent billing
//! information on the way: card lookup by name, statement-month
//! attribution, and installment expansion.

use chrono::{DateTime, Utc};
use ledger_kernel::calendar::{add_months, first_of_month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::card::Card;
use crate::error::LedgerError;
use crate::ports::CardPort;
use crate::reference_date::ReferenceDateCalculator;
use crate::transaction::{CreateTransactionProps, RecurrenceType, Transaction, TransactionType};

/// A request to record one ledger movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Overrides the calculated statement month when supplied
    #[serde(default)]
    pub reference_date: Option<DateTime<Utc>>,
    /// Values above 1 expand the request into a monthly installment plan
    #[serde(default)]
    pub installments: Option<u32>,
}

/// Expands creation requests into validated transaction batches
pub struct TransactionFactory {
    cards: Arc<dyn CardPort>,
}

impl TransactionFactory {
    pub fn new(cards: Arc<dyn CardPort>) -> Self {
        Self { cards }
    }

    /// Creates the transactions described by the request
    ///
    /// Steps, in order: resolve the transaction date (now when absent),
    /// resolve the named card (none named means no card attached and no
    /// lookup issued), resolve the reference date (an explicit one wins
    /// over the calculated statement month), then expand installments.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::CardNotFound`] when the named card does not exist
    /// - [`LedgerError::Validation`] when the resulting entity would
    ///   violate an invariant
    /// - [`LedgerError::Port`] when the card lookup itself fails
    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let transaction_date = request.date.unwrap_or_else(Utc::now);
        let card = self.resolve_card(request.card_name.as_deref()).await?;

        let reference_date = request.reference_date.or_else(|| {
            card.as_ref()
                .map(|card| ReferenceDateCalculator::calculate(transaction_date, card))
        });

        match request.installments {
            Some(installments) if installments > 1 => Self::expand_installments(
                &request,
                card.as_ref(),
                transaction_date,
                reference_date,
                installments,
            ),
            _ => {
                let transaction = Transaction::create(CreateTransactionProps {
                    id: None,
                    transaction_type: request.transaction_type,
                    description: request.description,
                    amount: request.amount,
                    category_name: request.category_name,
                    card_id: card.as_ref().map(|card| card.id),
                    card_name: card.map(|card| card.name),
                    date: Some(transaction_date),
                    reference_date,
                    recurrence_type: RecurrenceType::Single,
                    installment_total: None,
                    installment_current: None,
                    created_at: None,
                    updated_at: None,
                })?;
                Ok(vec![transaction])
            }
        }
    }

    async fn resolve_card(&self, card_name: Option<&str>) -> Result<Option<Card>, LedgerError> {
        let Some(name) = card_name else {
            return Ok(None);
        };
        match self.cards.find_by_name(name).await? {
            Some(card) => Ok(Some(card)),
            None => Err(LedgerError::CardNotFound(name.to_string())),
        }
    }

    /// Produces one transaction per installment, in ascending order
    ///
    /// Each installment's date is the base date advanced by `i - 1`
    /// calendar months with the day clamped to the target month's end;
    /// its reference date is advanced by the same offset and normalized
    /// to the first day of the resulting month.
    fn expand_installments(
        request: &CreateTransactionRequest,
        card: Option<&Card>,
        transaction_date: DateTime<Utc>,
        reference_date: Option<DateTime<Utc>>,
        installments: u32,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let mut batch = Vec::with_capacity(installments as usize);

        for current in 1..=installments {
            let offset = current - 1;
            let transaction = Transaction::create(CreateTransactionProps {
                id: None,
                transaction_type: request.transaction_type,
                description: request.description.clone(),
                amount: request.amount,
                category_name: request.category_name.clone(),
                card_id: card.map(|card| card.id),
                card_name: card.map(|card| card.name.clone()),
                date: Some(add_months(transaction_date, offset)),
                reference_date: reference_date
                    .map(|reference| first_of_month(add_months(reference, offset))),
                recurrence_type: RecurrenceType::Installment,
                installment_total: Some(installments),
                installment_current: Some(current),
                created_at: None,
                updated_at: None,
            })?;
            batch.push(transaction);
        }

        Ok(batch)
    }
}

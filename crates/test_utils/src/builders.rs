//! Test data builders
//!
//! Builders construct creation requests with sensible defaults so tests
//! only spell out the fields they are exercising.

use chrono::{DateTime, Utc};
use domain_ledger::{CreateTransactionRequest, TransactionType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for [`CreateTransactionRequest`]
///
/// Defaults to a single card-less expense of 100.00 described as
/// "Groceries", dated at creation time.
pub struct CreateTransactionRequestBuilder {
    transaction_type: TransactionType,
    description: String,
    amount: Decimal,
    category_name: Option<String>,
    card_name: Option<String>,
    date: Option<DateTime<Utc>>,
    reference_date: Option<DateTime<Utc>>,
    installments: Option<u32>,
}

impl Default for CreateTransactionRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTransactionRequestBuilder {
    pub fn new() -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            description: "Groceries".to_string(),
            amount: dec!(100.00),
            category_name: None,
            card_name: None,
            date: None,
            reference_date: None,
            installments: None,
        }
    }

    pub fn income(mut self) -> Self {
        self.transaction_type = TransactionType::Income;
        self
    }

    pub fn expense(mut self) -> Self {
        self.transaction_type = TransactionType::Expense;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = Some(category.into());
        self
    }

    pub fn on_card(mut self, card_name: impl Into<String>) -> Self {
        self.card_name = Some(card_name.into());
        self
    }

    pub fn on_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_reference_date(mut self, reference_date: DateTime<Utc>) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    pub fn with_installments(mut self, installments: u32) -> Self {
        self.installments = Some(installments);
        self
    }

    pub fn build(self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            transaction_type: self.transaction_type,
            description: self.description,
            amount: self.amount,
            category_name: self.category_name,
            card_name: self.card_name,
            date: self.date,
            reference_date: self.reference_date,
            installments: self.installments,
        }
    }
}

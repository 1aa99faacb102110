//! Tests for summary aggregation semantics
//!
//! These drive the read side through the query service, which owns the
//! end-of-day normalization, against the in-memory adapters.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use domain_ledger::adapters::{InMemoryCardStore, InMemoryTransactionStore};
use domain_ledger::{
    SummaryQuery, TransactionEntryService, TransactionFactory, TransactionQueryService,
};
use test_utils::{CardFixtures, CreateTransactionRequestBuilder, DateFixtures};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    DateFixtures::utc(y, m, d)
}

fn services() -> (TransactionEntryService, TransactionQueryService) {
    let cards = Arc::new(InMemoryCardStore::with_cards(CardFixtures::all()));
    let store = Arc::new(InMemoryTransactionStore::new());
    let entry = TransactionEntryService::new(store.clone(), TransactionFactory::new(cards));
    let query = TransactionQueryService::new(store);
    (entry, query)
}

#[tokio::test]
async fn test_flat_summary_over_a_month() {
    let (entry, query) = services();

    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .income()
                .with_description("Salary")
                .with_amount(dec!(5000))
                .on_date(utc(2025, 1, 5))
                .build(),
        )
        .await
        .unwrap();
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_description("Rent")
                .with_amount(dec!(1500))
                .on_date(utc(2025, 1, 7))
                .build(),
        )
        .await
        .unwrap();

    let summary = query
        .summary(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)))
        .await
        .unwrap();

    assert_eq!(summary.total_income, dec!(5000.00));
    assert_eq!(summary.total_expense, dec!(1500.00));
    assert_eq!(summary.balance, dec!(3500.00));
    assert_eq!(summary.transaction_count, 2);
}

#[tokio::test]
async fn test_summary_is_additive_over_disjoint_sub_periods() {
    let (entry, query) = services();

    for (amount, day) in [(dec!(120.30), 3), (dec!(75.50), 12), (dec!(48.20), 25)] {
        entry
            .create(
                CreateTransactionRequestBuilder::new()
                    .with_amount(amount)
                    .on_date(utc(2025, 1, day))
                    .build(),
            )
            .await
            .unwrap();
    }
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .income()
                .with_amount(dec!(900))
                .on_date(utc(2025, 1, 14))
                .build(),
        )
        .await
        .unwrap();

    let full = query
        .summary(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)))
        .await
        .unwrap();
    let first_half = query
        .summary(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 15)))
        .await
        .unwrap();
    let second_half = query
        .summary(SummaryQuery::new(utc(2025, 1, 16), utc(2025, 1, 31)))
        .await
        .unwrap();

    assert_eq!(
        full.total_income,
        first_half.total_income + second_half.total_income
    );
    assert_eq!(
        full.total_expense,
        first_half.total_expense + second_half.total_expense
    );
    assert_eq!(
        full.transaction_count,
        first_half.transaction_count + second_half.transaction_count
    );
}

#[tokio::test]
async fn test_end_day_is_inclusive_of_late_transactions() {
    let (entry, query) = services();

    // 18:30 on the period's last day
    let late = utc(2025, 1, 31) + chrono::Duration::hours(18) + chrono::Duration::minutes(30);
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(60))
                .on_date(late)
                .build(),
        )
        .await
        .unwrap();

    let summary = query
        .summary(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)))
        .await
        .unwrap();
    assert_eq!(summary.transaction_count, 1);
}

#[tokio::test]
async fn test_billing_cycle_attribution_moves_spend_across_months() {
    let (entry, query) = services();

    // Bradesco closes on day 28: a Jan 29 purchase bills in February
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(200))
                .on_card("Bradesco")
                .on_date(utc(2025, 1, 29))
                .build(),
        )
        .await
        .unwrap();

    let january = query
        .summary(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)))
        .await
        .unwrap();
    let february = query
        .summary(SummaryQuery::new(utc(2025, 2, 1), utc(2025, 2, 28)))
        .await
        .unwrap();

    assert_eq!(january.transaction_count, 0);
    assert_eq!(february.transaction_count, 1);
    assert_eq!(february.total_expense, dec!(200.00));
}

#[tokio::test]
async fn test_grouped_summary_keys_by_card_name() {
    let (entry, query) = services();

    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(80))
                .on_card("Nubank")
                .on_date(utc(2025, 1, 5))
                .build(),
        )
        .await
        .unwrap();
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(45))
                .on_card("Nubank")
                .on_date(utc(2025, 1, 6))
                .build(),
        )
        .await
        .unwrap();
    // Card-less spend in the same window never enters the grouped shape
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(999))
                .on_date(utc(2025, 1, 6))
                .build(),
        )
        .await
        .unwrap();

    let grouped = query
        .summary_by_card(SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)))
        .await
        .unwrap();

    assert_eq!(grouped.len(), 1);
    let nubank = &grouped["Nubank"];
    assert_eq!(nubank.total_expense, dec!(125.00));
    assert_eq!(nubank.transaction_count, 2);
    // Unused fixture cards are absent, not zeroed
    assert!(!grouped.contains_key("Bradesco"));
    assert!(!grouped.contains_key("BTG"));
}

#[tokio::test]
async fn test_grouped_summary_respects_card_filter() {
    let cards = CardFixtures::all();
    let nubank_id = cards[0].id;
    let card_store = Arc::new(InMemoryCardStore::with_cards(cards));
    let store = Arc::new(InMemoryTransactionStore::new());
    let entry = TransactionEntryService::new(store.clone(), TransactionFactory::new(card_store));
    let query = TransactionQueryService::new(store);

    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(80))
                .on_card("Nubank")
                .on_date(utc(2025, 1, 5))
                .build(),
        )
        .await
        .unwrap();
    entry
        .create(
            CreateTransactionRequestBuilder::new()
                .with_amount(dec!(70))
                .on_card("BTG")
                .on_date(utc(2025, 1, 5))
                .build(),
        )
        .await
        .unwrap();

    let grouped = query
        .summary_by_card(
            SummaryQuery::new(utc(2025, 1, 1), utc(2025, 1, 31)).with_card(nubank_id),
        )
        .await
        .unwrap();

    assert_eq!(grouped.len(), 1);
    assert!(grouped.contains_key("Nubank"));
}

mod properties {
    use domain_ledger::summary;
    use domain_ledger::{CreateTransactionProps, RecurrenceType, Transaction, TransactionType};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use test_utils::generators;

    fn expense_of(amount: Decimal) -> Transaction {
        Transaction::create(CreateTransactionProps {
            id: None,
            transaction_type: TransactionType::Expense,
            description: generators::description(),
            amount,
            category_name: None,
            card_id: None,
            card_name: None,
            date: None,
            reference_date: None,
            recurrence_type: RecurrenceType::Single,
            installment_total: None,
            installment_current: None,
            created_at: None,
            updated_at: None,
        })
        .unwrap()
    }

    proptest! {
        #[test]
        fn expense_total_equals_the_exact_decimal_sum(
            amounts in proptest::collection::vec(generators::cent_amounts(), 1..40)
        ) {
            let transactions: Vec<Transaction> =
                amounts.iter().copied().map(expense_of).collect();

            let result = summary::summarize(&transactions);
            let expected: Decimal = amounts.iter().copied().sum();

            prop_assert_eq!(result.total_expense, expected);
            prop_assert_eq!(result.balance, -expected);
            prop_assert_eq!(result.transaction_count, transactions.len() as u64);
        }
    }
}

#[tokio::test]
async fn test_inverted_range_is_rejected_before_any_query() {
    let (_, query) = services();

    let err = query
        .summary(SummaryQuery::new(utc(2025, 2, 1), utc(2025, 1, 31)))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "End date cannot be earlier than start date."
    );

    let err = query
        .summary_by_card(SummaryQuery::new(utc(2025, 2, 1), utc(2025, 1, 31)))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "End date cannot be earlier than start date."
    );
}

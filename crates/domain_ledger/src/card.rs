//! The card value object
//!
//! A card carries the billing-cycle configuration used to attribute
//! purchases to statement months. Cards are created from persisted data
//! and have no lifecycle of their own here.

use ledger_kernel::CardId;
use serde::{Deserialize, Serialize};

/// Credit-card billing-cycle configuration, keyed by unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Day-of-month (1-31) on which the statement closes; purchases on
    /// or after this day belong to the next month's bill
    pub closing_day: u32,
    /// Day-of-month (1-31) the bill is due; informational only
    pub due_day: u32,
}

impl Card {
    /// Creates a card from its persisted fields
    pub fn new(id: CardId, name: impl Into<String>, closing_day: u32, due_day: u32) -> Self {
        Self {
            id,
            name: name.into(),
            closing_day,
            due_day,
        }
    }
}

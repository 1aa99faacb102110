//! Port adapters shipped with the domain crate

pub mod memory;

pub use memory::{InMemoryCardStore, InMemoryTransactionStore};

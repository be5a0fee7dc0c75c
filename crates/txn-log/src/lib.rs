//! Append-only enrollment transaction log.
//!
//! Every registration, drop, and withdrawal is recorded as an immutable
//! [`Transaction`] in a per-student sequence. Entries are never mutated or
//! removed; the "completed" reading of an old registration is derived at
//! display time by the domain layer, never written back.

pub mod error;
pub mod log;
pub mod memory;
pub mod query;
pub mod transaction;

pub use error::{LogError, Result};
pub use log::{
    AppendOptions, TransactionLog, TransactionLogExt, TransactionStream,
    validate_entries_for_append,
};
pub use memory::InMemoryTransactionLog;
pub use query::TransactionQuery;
pub use transaction::{
    SequenceNumber, Transaction, TransactionAction, TransactionBuilder, TransactionId,
};

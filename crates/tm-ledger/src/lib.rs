//! tm-ledger - Applied-migration bookkeeping for Tidemark
//!
//! Provides the [`Ledger`], a wrapper over the database capability that owns
//! the bookkeeping table: existence check and creation, lookups by
//! fingerprint or filename, and the insert/update/rename writes.

pub mod error;
pub mod ledger;
pub mod record;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, TableState};
pub use record::LedgerRecord;

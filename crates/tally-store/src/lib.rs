//! Receipt storage for Receipt Tally.
//!
//! A stored receipt is immutable: it is inserted once under a fresh random
//! id and lives for the lifetime of the process. There is no update, no
//! delete, and no eviction.
//!
//! All backends implement the [`ReceiptStore`] trait:
//!
//! - [`InMemoryReceiptStore`] — `HashMap`-based store behind a `RwLock`
//!
//! # Design Rules
//!
//! 1. `put` always generates a fresh id; resubmitting the same receipt
//!    yields a new record (submission is not idempotent).
//! 2. Records are never mutated after insertion.
//! 3. Concurrent reads are always safe; inserts take the write lock only
//!    for the insertion itself.
//! 4. Backend errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReceiptStore;
pub use traits::ReceiptStore;

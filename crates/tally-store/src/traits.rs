use tally_types::{Receipt, ReceiptId};

use crate::error::StoreResult;

/// Key-value store for accepted receipts.
///
/// All implementations must satisfy these invariants:
/// - `put` generates a fresh random v4 id per call; identical receipts
///   submitted twice get two distinct ids.
/// - Records are immutable once written; there is no update or delete.
/// - Concurrent reads are always safe.
/// - Id collisions are not handled: v4 entropy makes them practically
///   impossible.
pub trait ReceiptStore: Send + Sync {
    /// Insert a receipt under a fresh id and return the id.
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId>;

    /// Look up a receipt by id.
    ///
    /// Returns `Ok(None)` if no receipt is stored under `id`.
    fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>>;
}

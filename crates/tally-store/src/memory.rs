use std::collections::HashMap;
use std::sync::RwLock;

use tally_types::{Receipt, ReceiptId};

use crate::error::StoreResult;
use crate::traits::ReceiptStore;

/// In-memory, HashMap-based receipt store.
///
/// The only backend the service ships with. All records are held in memory
/// behind a `RwLock` for safe concurrent access; receipts are cloned on
/// read. Nothing is ever evicted or persisted.
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of receipts currently stored.
    pub fn len(&self) -> usize {
        self.receipts.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.receipts.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        let id = ReceiptId::generate();
        let mut map = self.receipts.write().expect("lock poisoned");
        map.insert(id, receipt);
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>> {
        let map = self.receipts.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }
}

impl std::fmt::Debug for InMemoryReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryReceiptStore")
            .field("receipt_count", &self.len())
            .finish()
    }
}

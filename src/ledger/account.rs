use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named balance-holding entity within the ledger.
///
/// The balance is a cache over the transaction list; it is adjusted
/// incrementally by mutations and rebuilt wholesale when a document is
/// loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
        }
    }
}

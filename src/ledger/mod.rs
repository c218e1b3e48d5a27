//! Ledger domain models and the derived monthly summary view.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use account::Account;
pub use ledger::Ledger;
pub use summary::MonthlySummary;
pub use transaction::{Transaction, TransactionDraft};

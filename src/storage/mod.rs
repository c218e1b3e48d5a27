pub mod json_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over the file provider that owns the document's destination,
/// mirroring the open/create/save contract of a file-picker flow.
pub trait FileProvider: Send + Sync {
    /// Loads the document at `path` and binds future saves to it.
    fn open(&mut self, path: &Path) -> Result<Ledger>;

    /// Creates a fresh empty document at `path`, persists it immediately,
    /// and binds future saves to it.
    fn create(&mut self, path: &Path) -> Result<Ledger>;

    /// Persists the document to the bound destination. A provider with no
    /// destination ignores the call.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// The currently bound destination, if any.
    fn bound_path(&self) -> Option<&Path>;
}

pub use json_backend::{
    document_warnings, load_ledger_from_path, save_ledger_to_path, JsonFileProvider,
};

use std::path::Path;

use uuid::Uuid;

use crate::{
    errors::LedgerError,
    ledger::{Ledger, TransactionDraft},
    storage::FileProvider,
};

/// Coordinates the in-memory ledger with its file provider: the
/// open/create/save/autosave flow a presentation layer drives.
///
/// The session owns the only mutable handle to the document, so every
/// mutation funnels through it and can trigger an autosave.
pub struct DocumentSession {
    ledger: Ledger,
    provider: Box<dyn FileProvider>,
    autosave: bool,
}

impl DocumentSession {
    pub fn new(provider: Box<dyn FileProvider>) -> Self {
        Self {
            ledger: Ledger::new(),
            provider,
            autosave: false,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    pub fn set_autosave(&mut self, enabled: bool) {
        self.autosave = enabled;
    }

    pub fn bound_path(&self) -> Option<&Path> {
        self.provider.bound_path()
    }

    /// Opens a document and makes it current. Balances are rebuilt from the
    /// transaction list since stored balances are an untrusted cache. On
    /// failure the previous document stays current.
    pub fn open(&mut self, path: &Path) -> Result<(), LedgerError> {
        let mut ledger = self.provider.open(path)?;
        ledger.recompute_balances();
        self.ledger = ledger;
        Ok(())
    }

    /// Creates a fresh empty document, persists it, and makes it current.
    pub fn create(&mut self, path: &Path) -> Result<(), LedgerError> {
        self.ledger = self.provider.create(path)?;
        Ok(())
    }

    /// Saves the current document. A session with no bound destination
    /// ignores the call.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.provider.save(&self.ledger)
    }

    pub fn add_account(&mut self, name: &str, initial_balance: f64) -> Result<Uuid, LedgerError> {
        let id = self.ledger.add_account(name, initial_balance)?;
        self.autosave_if_enabled()?;
        Ok(id)
    }

    pub fn rename_account(&mut self, id: Uuid, new_name: &str) -> Result<(), LedgerError> {
        self.ledger.rename_account(id, new_name)?;
        self.autosave_if_enabled()
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Uuid, LedgerError> {
        let id = self.ledger.add_transaction(draft)?;
        self.autosave_if_enabled()?;
        Ok(id)
    }

    pub fn edit_transaction(
        &mut self,
        index: usize,
        draft: TransactionDraft,
    ) -> Result<(), LedgerError> {
        self.ledger.edit_transaction(index, draft)?;
        self.autosave_if_enabled()
    }

    pub fn remove_transaction(&mut self, index: usize) -> Result<(), LedgerError> {
        self.ledger.remove_transaction(index)?;
        self.autosave_if_enabled()
    }

    fn autosave_if_enabled(&self) -> Result<(), LedgerError> {
        if self.autosave {
            tracing::debug!("autosaving after mutation");
            self.save()?;
        }
        Ok(())
    }
}

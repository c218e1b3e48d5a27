use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::ledger::Ledger;

use super::{FileProvider, Result};

const TMP_SUFFIX: &str = "tmp";

/// File provider backed by a single JSON document on the local filesystem.
///
/// `open`/`create` bind the provider to a path, after which `save` rewrites
/// that path. Writes are staged to a temporary file and renamed into place
/// so a failed write never corrupts the existing document.
#[derive(Debug, Default)]
pub struct JsonFileProvider {
    path: Option<PathBuf>,
}

impl JsonFileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider already bound to a destination, as after a picker dialog.
    pub fn bound_to(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl FileProvider for JsonFileProvider {
    fn open(&mut self, path: &Path) -> Result<Ledger> {
        let ledger = load_ledger_from_path(path)?;
        self.path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            accounts = ledger.accounts.len(),
            transactions = ledger.transactions.len(),
            "document opened"
        );
        Ok(ledger)
    }

    fn create(&mut self, path: &Path) -> Result<Ledger> {
        let ledger = Ledger::new();
        save_ledger_to_path(&ledger, path)?;
        self.path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "empty document created");
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            tracing::debug!("save skipped: no destination bound");
            return Ok(());
        };
        save_ledger_to_path(ledger, path)
    }

    fn bound_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Writes the ledger to disk atomically by staging to a temporary file.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a ledger document from disk, surfacing malformed content as
/// [`crate::errors::LedgerError::InvalidFormat`].
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    Ok(ledger)
}

/// Non-fatal diagnostics for a loaded document: transactions referencing an
/// account missing from the account list.
pub fn document_warnings(ledger: &Ledger) -> Vec<String> {
    let account_ids: HashSet<_> = ledger.accounts.iter().map(|account| account.id).collect();
    let mut warnings = Vec::new();
    for txn in &ledger.transactions {
        if !account_ids.contains(&txn.account_id) {
            warnings.push(format!(
                "transaction {} references unknown account {}",
                txn.id, txn.account_id
            ));
        }
    }
    warnings
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::named("Household");
        ledger.color = Some("#4caf50".into());
        ledger
            .add_account_on(
                "Checking",
                150.0,
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("household.json");
        let ledger = sample_ledger();

        save_ledger_to_path(&ledger, &path).expect("save ledger");
        let loaded = load_ledger_from_path(&path).expect("load ledger");

        assert_eq!(loaded.name.as_deref(), Some("Household"));
        assert_eq!(loaded.color.as_deref(), Some("#4caf50"));
        assert_eq!(loaded.accounts, ledger.accounts);
        assert_eq!(loaded.transactions, ledger.transactions);
    }

    #[test]
    fn open_rejects_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut provider = JsonFileProvider::new();
        let err = provider.open(&path).expect_err("open must fail");
        assert!(matches!(err, LedgerError::InvalidFormat(_)));
        assert!(
            provider.bound_path().is_none(),
            "a failed open must not bind the destination"
        );
    }

    #[test]
    fn missing_document_fields_default_to_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("minimal.json");
        std::fs::write(&path, "{}").unwrap();

        let ledger = load_ledger_from_path(&path).expect("load minimal document");
        assert!(ledger.name.is_none());
        assert!(ledger.accounts.is_empty());
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn save_without_destination_is_a_noop() {
        let provider = JsonFileProvider::new();
        provider.save(&sample_ledger()).expect("unbound save is ok");
    }

    #[test]
    fn create_persists_an_empty_document() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("fresh.json");

        let mut provider = JsonFileProvider::new();
        let ledger = provider.create(&path).expect("create document");
        assert!(ledger.accounts.is_empty());
        assert!(path.exists());
        assert_eq!(provider.bound_path(), Some(path.as_path()));
    }

    #[test]
    fn warnings_flag_transactions_with_unknown_accounts() {
        let mut ledger = sample_ledger();
        ledger.transactions[0].account_id = uuid::Uuid::new_v4();

        let warnings = document_warnings(&ledger);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unknown account"));
    }
}

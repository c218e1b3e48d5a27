use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use finance_core::{
    ledger::{Ledger, TransactionDraft},
    session::DocumentSession,
    storage::{load_ledger_from_path, save_ledger_to_path, JsonFileProvider},
};
use tempfile::tempdir;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::named("Household");
    let checking = ledger
        .add_account_on("Checking", 150.0, date(2024, 5, 2))
        .unwrap();
    ledger
        .add_transaction(TransactionDraft::new(
            "Groceries",
            -42.5,
            date(2024, 5, 10),
            checking,
        ))
        .unwrap();
    ledger
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn save_then_open_yields_equivalent_document() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("household.json");
    let ledger = sample_ledger();

    save_ledger_to_path(&ledger, &path).expect("save document");

    let mut session = DocumentSession::new(Box::new(JsonFileProvider::new()));
    session.open(&path).expect("reopen document");

    let reopened = session.ledger();
    assert_eq!(reopened.name.as_deref(), Some("Household"));
    assert_eq!(reopened.transactions, ledger.transactions);
    assert_eq!(reopened.accounts, ledger.accounts);
}

#[test]
fn open_recomputes_untrusted_stored_balances() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("stale.json");

    let mut ledger = sample_ledger();
    // Corrupt the cached balance the way a hand-edited file might.
    ledger.accounts[0].balance = 9999.0;
    save_ledger_to_path(&ledger, &path).expect("save document");

    let mut session = DocumentSession::new(Box::new(JsonFileProvider::new()));
    session.open(&path).expect("open document");

    let balance = session.ledger().accounts[0].balance;
    assert!(
        (balance - 107.5).abs() < 1e-9,
        "expected 150 - 42.5, got {balance}"
    );
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("reliable.json");

    let mut ledger = sample_ledger();
    save_ledger_to_path(&ledger, &path).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // Create a directory that collides with the staging file name to force
    // the write to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    ledger
        .add_transaction(TransactionDraft::new(
            "Would be lost",
            99.0,
            date(2024, 5, 11),
            ledger.accounts[0].id,
        ))
        .unwrap();
    let result = save_ledger_to_path(&ledger, &path);
    assert!(
        result.is_err(),
        "expected save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the original file"
    );
}

#[test]
fn parses_a_hand_written_document() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("manual.json");

    let account_id = Uuid::new_v4();
    let raw = format!(
        r##"{{
            "name": "Vacation fund",
            "color": "#2196f3",
            "accounts": [{{"id": "{account_id}", "name": "Savings", "balance": 0}}],
            "transactions": [{{
                "id": "{}",
                "description": "Deposit",
                "amount": 250.0,
                "date": "2024-07-01",
                "account": "{account_id}"
            }}]
        }}"##,
        Uuid::new_v4()
    );
    fs::write(&path, raw).unwrap();

    let ledger = load_ledger_from_path(&path).expect("parse document");
    assert_eq!(ledger.name.as_deref(), Some("Vacation fund"));
    assert_eq!(ledger.transactions[0].amount, 250.0);
    assert_eq!(ledger.transactions[0].date, date(2024, 7, 1));
    assert_eq!(ledger.transactions[0].account_id, account_id);
}

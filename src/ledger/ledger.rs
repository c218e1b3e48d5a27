use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    account::Account,
    transaction::{Transaction, TransactionDraft},
};

/// The full document persisted to disk: optional display metadata plus the
/// account and transaction lists, both in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Adds an account and returns its id. A nonzero initial balance is
    /// recorded as a synthetic transaction dated today, keeping the balance
    /// derivable from the transaction list alone.
    pub fn add_account(&mut self, name: &str, initial_balance: f64) -> Result<Uuid, LedgerError> {
        self.add_account_on(name, initial_balance, Local::now().date_naive())
    }

    /// Same as [`Ledger::add_account`] with an explicit date for the seed
    /// transaction.
    pub fn add_account_on(
        &mut self,
        name: &str,
        initial_balance: f64,
        today: NaiveDate,
    ) -> Result<Uuid, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "account name must not be empty".into(),
            ));
        }
        if !initial_balance.is_finite() {
            return Err(LedgerError::InvalidInput(
                "initial balance must be a valid number".into(),
            ));
        }
        let account = Account::new(name);
        let id = account.id;
        self.accounts.push(account);
        if initial_balance != 0.0 {
            let seed = Transaction::new(
                format!("Initial balance for {name}"),
                initial_balance,
                today,
                id,
            );
            self.transactions.push(seed);
            self.update_account_balance(id, initial_balance);
        }
        Ok(id)
    }

    /// Renames an account. Transactions reference the id, so history stays
    /// attached.
    pub fn rename_account(&mut self, id: Uuid, new_name: &str) -> Result<(), LedgerError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "account name must not be empty".into(),
            ));
        }
        let account = self
            .account_mut(id)
            .ok_or_else(|| LedgerError::InvalidRef(format!("unknown account {id}")))?;
        account.name = new_name.to_string();
        Ok(())
    }

    /// Records a transaction and applies its amount to the owning account's
    /// balance. An unknown account id is tolerated: the transaction is still
    /// recorded and only the balance update is skipped.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Uuid, LedgerError> {
        validate_draft(&draft)?;
        let txn = Transaction::new(
            draft.description.trim(),
            draft.amount,
            draft.date,
            draft.account_id,
        );
        let id = txn.id;
        self.update_account_balance(draft.account_id, draft.amount);
        self.transactions.push(txn);
        Ok(id)
    }

    /// Replaces the transaction at `index` in place: the old amount is
    /// reversed against the old account before the new amount is applied to
    /// the (possibly different) new account.
    pub fn edit_transaction(
        &mut self,
        index: usize,
        draft: TransactionDraft,
    ) -> Result<(), LedgerError> {
        validate_draft(&draft)?;
        let (old_account, old_amount) = match self.transactions.get(index) {
            Some(txn) => (txn.account_id, txn.amount),
            None => {
                return Err(LedgerError::InvalidRef(format!(
                    "no transaction at index {index}"
                )))
            }
        };
        self.update_account_balance(old_account, -old_amount);
        self.update_account_balance(draft.account_id, draft.amount);
        let txn = &mut self.transactions[index];
        txn.description = draft.description.trim().to_string();
        txn.amount = draft.amount;
        txn.date = draft.date;
        txn.account_id = draft.account_id;
        Ok(())
    }

    /// Deletes the transaction at `index`, reversing its balance effect, and
    /// returns the removed instance.
    pub fn remove_transaction(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        if index >= self.transactions.len() {
            return Err(LedgerError::InvalidRef(format!(
                "no transaction at index {index}"
            )));
        }
        let txn = self.transactions.remove(index);
        self.update_account_balance(txn.account_id, -txn.amount);
        Ok(txn)
    }

    /// Applies `delta` to the referenced account's balance. A missing
    /// account is skipped so stray references never fail a mutation.
    pub fn update_account_balance(&mut self, account_id: Uuid, delta: f64) {
        match self
            .accounts
            .iter_mut()
            .find(|account| account.id == account_id)
        {
            Some(account) => account.balance += delta,
            None => tracing::debug!(%account_id, delta, "balance update skipped: unknown account"),
        }
    }

    /// Rebuilds every account balance from the transaction list. Balances
    /// stored in a loaded file are a stale cache and are overwritten.
    pub fn recompute_balances(&mut self) {
        for account in &mut self.accounts {
            account.balance = self
                .transactions
                .iter()
                .filter(|txn| txn.account_id == account.id)
                .map(|txn| txn.amount)
                .sum();
        }
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// First account carrying the given display name. Names are not unique;
    /// identity is the id.
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

fn validate_draft(draft: &TransactionDraft) -> Result<(), LedgerError> {
    if draft.description.trim().is_empty() {
        return Err(LedgerError::InvalidInput(
            "description must not be empty".into(),
        ));
    }
    if !draft.amount.is_finite() {
        return Err(LedgerError::InvalidInput(
            "amount must be a valid number".into(),
        ));
    }
    Ok(())
}

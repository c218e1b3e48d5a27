use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated, signed monetary entry attributed to one account.
///
/// Positive amounts are income, negative amounts are expenses. The owning
/// account is referenced by id rather than display name, so renaming an
/// account never orphans its history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "account")]
    pub account_id: Uuid,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            account_id,
        }
    }

    /// The `YYYY-MM` key the monthly summary groups by.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// User-entered field values for creating or editing a transaction.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub account_id: Uuid,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            account_id,
        }
    }
}

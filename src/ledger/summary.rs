use serde::Serialize;

use super::{ledger::Ledger, transaction::Transaction};

/// Income and expense totals for one calendar month, together with that
/// month's transactions in insertion order. Derived on demand, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub transactions: Vec<Transaction>,
}

impl MonthlySummary {
    fn new(month: String) -> Self {
        Self {
            month,
            income: 0.0,
            expense: 0.0,
            transactions: Vec::new(),
        }
    }

    /// Net result for the month. `expense` is a sum of negative amounts, so
    /// this is simply `income + expense`.
    pub fn final_balance(&self) -> f64 {
        self.income + self.expense
    }
}

impl Ledger {
    /// Groups transactions by their `YYYY-MM` key in a single pass. A month
    /// entry is created lazily when first seen, so the returned entries are
    /// in first-occurrence order. Positive amounts accumulate into `income`,
    /// everything else into `expense`.
    pub fn summarize_by_month(&self) -> Vec<MonthlySummary> {
        let mut months: Vec<MonthlySummary> = Vec::new();
        for txn in &self.transactions {
            let key = txn.month_key();
            let pos = match months.iter().position(|entry| entry.month == key) {
                Some(pos) => pos,
                None => {
                    months.push(MonthlySummary::new(key));
                    months.len() - 1
                }
            };
            let entry = &mut months[pos];
            if txn.amount > 0.0 {
                entry.income += txn.amount;
            } else {
                entry.expense += txn.amount;
            }
            entry.transactions.push(txn.clone());
        }
        months
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::models::{Currency, Transaction, TxType};
use crate::store::BlobStore;
use crate::utils::parse_date;

/// In-progress entry. Text fields hold exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransaction {
    pub date: String,
    kind: TxType,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub currency: Currency,
}

impl DraftTransaction {
    /// Blank draft dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            kind: TxType::default(),
            category: String::new(),
            amount: String::new(),
            description: String::new(),
            currency: Currency::default(),
        }
    }

    pub fn kind(&self) -> TxType {
        self.kind
    }

    /// Switching type clears the category, since the allowed list differs.
    pub fn set_kind(&mut self, kind: TxType) {
        if self.kind != kind {
            self.category.clear();
        }
        self.kind = kind;
    }

    /// Validates the draft and builds the committed record.
    pub fn commit(&self, id: i64, created_at: DateTime<Utc>) -> Result<Transaction> {
        let date = parse_date(&self.date)?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(LedgerError::MissingCategory);
        }
        if !self.kind.allows_category(category) {
            return Err(LedgerError::UnknownCategory {
                category: category.to_string(),
                kind: self.kind.to_string(),
            });
        }

        let amount = parse_amount(&self.amount)?;

        Ok(Transaction {
            id,
            date,
            kind: self.kind,
            category: category.to_string(),
            amount,
            currency: self.currency,
            description: self.description.trim().to_string(),
            created_at,
        })
    }
}

/// Parses a strictly positive decimal amount.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount.to_string()));
    }
    Ok(amount)
}

/// Draft plus the open/closed state of the entry form.
#[derive(Debug, Clone)]
pub struct EntryForm {
    open: bool,
    draft: DraftTransaction,
}

impl EntryForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            open: false,
            draft: DraftTransaction::new(today),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn draft(&self) -> &DraftTransaction {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftTransaction {
        &mut self.draft
    }

    /// Commits the draft into `ledger`, then resets the draft and closes the
    /// form. On error nothing changes.
    pub fn submit<S: BlobStore>(
        &mut self,
        ledger: &mut Ledger<S>,
        now: DateTime<Utc>,
    ) -> Result<Transaction> {
        let id = ledger.next_id(now.timestamp_millis())?;
        let tx = self.draft.commit(id, now)?;
        ledger.append(tx.clone())?;
        debug!(id, "draft committed");
        self.draft = DraftTransaction::new(now.date_naive());
        self.open = false;
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn defaults_match_blank_form() {
        let d = DraftTransaction::new(today());
        assert_eq!(d.date, "2025-06-30");
        assert_eq!(d.kind(), TxType::Expense);
        assert_eq!(d.currency, Currency::Twd);
        assert!(d.category.is_empty());
        assert!(d.amount.is_empty());
    }

    #[test]
    fn amount_must_be_positive_number() {
        assert!(matches!(parse_amount("abc"), Err(LedgerError::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(LedgerError::InvalidAmount(_))));
        assert!(matches!(
            parse_amount("0"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount("-3"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Decimal::new(1250, 2));
    }

    #[test]
    fn setting_same_kind_keeps_category() {
        let mut d = DraftTransaction::new(today());
        d.category = "freight".into();
        d.set_kind(TxType::Expense);
        assert_eq!(d.category, "freight");
    }
}

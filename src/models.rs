// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

pub const INCOME_CATEGORIES: &[&str] = &["service fee", "profit", "other income"];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "cost of goods",
    "freight",
    "packaging",
    "marketing",
    "office",
    "other expense",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    #[default]
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }

    /// Categories offered at entry time for this type.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TxType::Income => INCOME_CATEGORIES,
            TxType::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn allows_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            other => Err(LedgerError::UnknownType(other.to_string())),
        }
    }
}

// Declaration order is the display order of the per-currency panel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Twd,
    Jpy,
    Usd,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Twd, Currency::Jpy, Currency::Usd, Currency::Cny];

    /// Currency of the headline income/expense/net figures.
    pub const BASE: Currency = Currency::Twd;

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Twd => "TWD",
            Currency::Jpy => "JPY",
            Currency::Usd => "USD",
            Currency::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let up = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == up)
            .ok_or_else(|| LedgerError::UnknownCurrency(s.to_string()))
    }
}

/// A committed ledger record. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TxType,
    pub category: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with the direction implied by `kind` applied.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxType::Income => self.amount,
            TxType::Expense => -self.amount,
        }
    }
}

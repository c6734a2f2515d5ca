// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::error::{LedgerError, Result};
use crate::models::{Currency, Transaction, TxType};

/// Totals derived from a ledger in one pass. Amounts serialize as JSON
/// numbers, like the stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Income in the base currency.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_income: Decimal,
    /// Expense in the base currency.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_expense: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub net_profit: Decimal,
    /// Signed net per currency; every known currency is present.
    #[serde(serialize_with = "balances_as_floats")]
    pub balances: BTreeMap<Currency, Decimal>,
}

impl Summary {
    /// Fails only when a running total leaves the `Decimal` range.
    pub fn compute(transactions: &[Transaction]) -> Result<Self> {
        let mut balances: BTreeMap<Currency, Decimal> =
            Currency::ALL.iter().map(|c| (*c, Decimal::ZERO)).collect();
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;

        for t in transactions {
            let overflow = || LedgerError::AmountOverflow(t.currency.to_string());
            let bal = balances.entry(t.currency).or_insert(Decimal::ZERO);
            *bal = bal.checked_add(t.signed_amount()).ok_or_else(overflow)?;
            if t.currency == Currency::BASE {
                match t.kind {
                    TxType::Income => {
                        total_income = total_income.checked_add(t.amount).ok_or_else(overflow)?
                    }
                    TxType::Expense => {
                        total_expense = total_expense.checked_add(t.amount).ok_or_else(overflow)?
                    }
                }
            }
        }

        let net_profit = total_income
            .checked_sub(total_expense)
            .ok_or_else(|| LedgerError::AmountOverflow(Currency::BASE.to_string()))?;
        Ok(Self {
            total_income,
            total_expense,
            net_profit,
            balances,
        })
    }

    pub fn balance(&self, currency: Currency) -> Decimal {
        self.balances
            .get(&currency)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Currencies whose balance is nonzero, in panel order.
    pub fn visible_balances(&self) -> Vec<(Currency, Decimal)> {
        self.balances
            .iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(c, v)| (*c, *v))
            .collect()
    }

    pub fn show_currency_panel(&self) -> bool {
        self.balances.values().any(|v| !v.is_zero())
    }
}

fn balances_as_floats<S: Serializer>(
    balances: &BTreeMap<Currency, Decimal>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(
        balances
            .iter()
            .map(|(c, v)| (c, v.to_f64().unwrap_or(f64::NAN))),
    )
}

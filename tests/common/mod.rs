// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tallybook::confirm::Confirm;
use tallybook::form::DraftTransaction;
use tallybook::models::{Currency, Transaction, TxType};

pub fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn record(
    id: i64,
    kind: TxType,
    category: &str,
    amount: &str,
    currency: Currency,
) -> Transaction {
    let mut draft = DraftTransaction::new(day("2025-08-01"));
    draft.set_kind(kind);
    draft.category = category.into();
    draft.amount = amount.into();
    draft.currency = currency;
    draft.commit(id, at(id)).unwrap()
}

pub struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _prompt: &str) -> tallybook::Result<bool> {
        Ok(false)
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{at, day};
use tallybook::form::{DraftTransaction, EntryForm};
use tallybook::store::MemoryStore;
use tallybook::{Currency, Ledger, LedgerError, TxType};

#[test]
fn changing_type_clears_category() {
    let mut d = DraftTransaction::new(day("2025-08-01"));
    d.category = "freight".into();
    d.set_kind(TxType::Income);
    assert!(d.category.is_empty());
    assert_eq!(d.kind(), TxType::Income);
}

#[test]
fn submit_appends_resets_and_closes() {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(&store);
    let mut form = EntryForm::new(day("2025-08-01"));
    form.toggle();
    assert!(form.is_open());
    {
        let d = form.draft_mut();
        d.set_kind(TxType::Income);
        d.category = "profit".into();
        d.amount = "1000".into();
        d.currency = Currency::Usd;
        d.description = "  consignment  ".into();
    }

    let now = at(1_754_000_000_000);
    let tx = form.submit(&mut ledger, now).unwrap();
    assert_eq!(tx.id, now.timestamp_millis());
    assert_eq!(tx.created_at, now);
    assert_eq!(tx.description, "consignment");
    assert_eq!(ledger.transactions(), &[tx]);

    assert!(!form.is_open());
    assert_eq!(form.draft(), &DraftTransaction::new(now.date_naive()));
}

#[test]
fn invalid_draft_leaves_everything_untouched() {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(&store);
    let mut form = EntryForm::new(day("2025-08-01"));
    form.toggle();
    {
        let d = form.draft_mut();
        d.category = "freight".into();
        d.amount = "12abc".into();
    }
    let snapshot = form.draft().clone();

    let err = form.submit(&mut ledger, at(1)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
    assert!(ledger.is_empty());
    assert!(form.is_open());
    assert_eq!(form.draft(), &snapshot);
}

#[test]
fn category_must_match_type() {
    let mut d = DraftTransaction::new(day("2025-08-01"));
    d.amount = "5".into();
    assert!(matches!(d.commit(1, at(1)), Err(LedgerError::MissingCategory)));

    d.category = "profit".into();
    assert!(matches!(
        d.commit(1, at(1)),
        Err(LedgerError::UnknownCategory { .. })
    ));

    d.set_kind(TxType::Income);
    d.category = "profit".into();
    assert!(d.commit(1, at(1)).is_ok());
}

#[test]
fn malformed_date_is_rejected() {
    let mut d = DraftTransaction::new(day("2025-08-01"));
    d.category = "office".into();
    d.amount = "5".into();
    d.date = "2025/08/01".into();
    assert!(matches!(d.commit(1, at(1)), Err(LedgerError::InvalidDate(_))));
}

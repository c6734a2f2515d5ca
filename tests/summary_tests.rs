// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::record;
use rust_decimal::Decimal;
use tallybook::confirm::AssumeYes;
use tallybook::store::MemoryStore;
use tallybook::{Currency, Ledger, Summary, TxType};

#[test]
fn income_and_expense_in_base_currency() {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(&store);
    ledger
        .append(record(1, TxType::Income, "profit", "1000", Currency::Twd))
        .unwrap();
    ledger
        .append(record(2, TxType::Expense, "freight", "300", Currency::Twd))
        .unwrap();

    let s = ledger.summary().unwrap();
    assert_eq!(s.total_income, Decimal::from(1000));
    assert_eq!(s.total_expense, Decimal::from(300));
    assert_eq!(s.net_profit, Decimal::from(700));
    assert_eq!(s.visible_balances(), vec![(Currency::Twd, Decimal::from(700))]);
}

#[test]
fn foreign_income_only_shows_in_currency_panel() {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(&store);
    ledger
        .append(record(1, TxType::Income, "service fee", "5000", Currency::Jpy))
        .unwrap();

    let s = ledger.summary().unwrap();
    assert!(s.total_income.is_zero());
    assert!(s.total_expense.is_zero());
    assert!(s.net_profit.is_zero());
    assert!(s.show_currency_panel());
    assert_eq!(s.visible_balances(), vec![(Currency::Jpy, Decimal::from(5000))]);
}

#[test]
fn append_then_remove_restores_summary() {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(&store);
    ledger
        .append(record(1, TxType::Income, "profit", "250", Currency::Usd))
        .unwrap();
    let len_before = ledger.len();
    let before = ledger.summary().unwrap();

    ledger
        .append(record(2, TxType::Expense, "marketing", "99.99", Currency::Usd))
        .unwrap();
    assert_ne!(ledger.summary().unwrap(), before);

    ledger.remove_with(2, &AssumeYes).unwrap();
    assert_eq!(ledger.len(), len_before);
    assert_eq!(ledger.summary().unwrap(), before);
}

#[test]
fn empty_ledger_is_all_zero() {
    let ledger = Ledger::load(MemoryStore::new());
    let s = ledger.summary().unwrap();
    assert!(s.total_income.is_zero() && s.total_expense.is_zero() && s.net_profit.is_zero());
    assert!(s.balances.values().all(|v| v.is_zero()));
    assert!(!s.show_currency_panel());
}

#[test]
fn balances_are_signed_sums_and_computation_is_pure() {
    let txs = vec![
        record(6, TxType::Expense, "office", "1.25", Currency::Cny),
        record(5, TxType::Income, "other income", "10", Currency::Cny),
        record(4, TxType::Expense, "cost of goods", "400", Currency::Twd),
        record(3, TxType::Income, "profit", "150", Currency::Twd),
        record(2, TxType::Expense, "freight", "7", Currency::Usd),
    ];
    let s = Summary::compute(&txs).unwrap();
    assert_eq!(s.net_profit, s.total_income - s.total_expense);
    assert_eq!(s.net_profit, Decimal::from(-250));
    assert_eq!(s.balance(Currency::Cny), Decimal::new(875, 2));
    assert_eq!(s.balance(Currency::Usd), Decimal::from(-7));
    assert!(s.balance(Currency::Jpy).is_zero());
    for ccy in Currency::ALL {
        let expected: Decimal = txs
            .iter()
            .filter(|t| t.currency == ccy)
            .map(|t| t.signed_amount())
            .sum();
        assert_eq!(s.balance(ccy), expected);
    }
    assert_eq!(Summary::compute(&txs).unwrap(), s);
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::Currency;
use crate::store::BlobStore;
use crate::summary::Summary;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle<S: BlobStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let summary = ledger.summary()?;
    if maybe_print_json(sub.get_flag("json"), false, &summary)? {
        return Ok(());
    }
    println!("{}", headline_table(&summary));
    if summary.show_currency_panel() {
        println!("{}", currency_table(&summary));
    }
    Ok(())
}

pub fn headline_table(summary: &Summary) -> comfy_table::Table {
    let base = Currency::BASE;
    let income = format!("Income ({})", base);
    let expense = format!("Expense ({})", base);
    let net = format!("Net ({})", base);
    pretty_table(
        &[income.as_str(), expense.as_str(), net.as_str()],
        vec![vec![
            fmt_amount(&summary.total_income),
            fmt_amount(&summary.total_expense),
            fmt_amount(&summary.net_profit),
        ]],
    )
}

/// Only currencies with a nonzero balance get a row.
pub fn currency_table(summary: &Summary) -> comfy_table::Table {
    let rows = summary
        .visible_balances()
        .into_iter()
        .map(|(ccy, bal)| vec![ccy.to_string(), fmt_amount(&bal)])
        .collect();
    pretty_table(&["CCY", "Balance"], rows)
}

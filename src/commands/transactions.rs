// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use serde::Serialize;

use crate::confirm::{AssumeYes, Confirm, DialoguerConfirm};
use crate::form::{DraftTransaction, EntryForm};
use crate::ledger::Ledger;
use crate::models::{Currency, Transaction, TxType};
use crate::store::BlobStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle<S: BlobStore>(ledger: &mut Ledger<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let tx = add(ledger, sub, Utc::now())?;
            println!(
                "Recorded {} {} {} {} on {} (id {})",
                tx.kind,
                tx.category,
                fmt_amount(&tx.amount),
                tx.currency,
                tx.date,
                tx.id
            );
        }
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => {
            let confirmer: Box<dyn Confirm> = if sub.get_flag("yes") {
                Box::new(AssumeYes)
            } else {
                Box::new(DialoguerConfirm::default())
            };
            remove(ledger, sub, confirmer.as_ref())?;
        }
        _ => {}
    }
    Ok(())
}

/// Fills an entry form from flags (and prompts with `--interactive`), then
/// submits it.
pub fn add<S: BlobStore>(
    ledger: &mut Ledger<S>,
    sub: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<Transaction> {
    let mut form = EntryForm::new(now.date_naive());
    form.toggle();
    fill_from_matches(form.draft_mut(), sub)?;
    if sub.get_flag("interactive") {
        prompt_missing(form.draft_mut(), &fields_to_prompt(sub))?;
    } else {
        let draft = form.draft();
        if draft.category.is_empty() {
            bail!("--category is required (or use --interactive)");
        }
        if draft.amount.is_empty() {
            bail!("--amount is required (or use --interactive)");
        }
    }
    let tx = form
        .submit(ledger, now)
        .context("Transaction was not recorded")?;
    Ok(tx)
}

pub fn fill_from_matches(draft: &mut DraftTransaction, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(t) = sub.get_one::<String>("type") {
        draft.set_kind(t.parse::<TxType>()?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        draft.category = c.to_string();
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        draft.amount = a.to_string();
    }
    if let Some(c) = sub.get_one::<String>("currency") {
        draft.currency = c.parse::<Currency>()?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        draft.date = d.to_string();
    }
    if let Some(d) = sub.get_one::<String>("description") {
        draft.description = d.to_string();
    }
    Ok(())
}

/// Fields `tx add --interactive` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Type,
    Category,
    Amount,
    Currency,
    Date,
    Description,
}

/// Fields with no flag on the command line, in prompt order. A category flag
/// fixes the type too, since changing the type would clear the category.
pub fn fields_to_prompt(sub: &clap::ArgMatches) -> Vec<PromptField> {
    let given = |id: &str| sub.get_one::<String>(id).is_some();
    [
        (PromptField::Type, given("type") || given("category")),
        (PromptField::Category, given("category")),
        (PromptField::Amount, given("amount")),
        (PromptField::Currency, given("currency")),
        (PromptField::Date, given("date")),
        (PromptField::Description, given("description")),
    ]
    .into_iter()
    .filter(|(_, given)| !given)
    .map(|(field, _)| field)
    .collect()
}

fn prompt_missing(draft: &mut DraftTransaction, fields: &[PromptField]) -> Result<()> {
    let theme = ColorfulTheme::default();
    for field in fields {
        match field {
            PromptField::Type => {
                let kinds = [TxType::Expense, TxType::Income];
                let idx = Select::with_theme(&theme)
                    .with_prompt("Type")
                    .items(&kinds.map(|k| k.as_str()))
                    .default(kinds.iter().position(|k| *k == draft.kind()).unwrap_or(0))
                    .interact()?;
                draft.set_kind(kinds[idx]);
            }
            PromptField::Category => {
                let cats = draft.kind().categories();
                let idx = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(cats)
                    .default(0)
                    .interact()?;
                draft.category = cats[idx].to_string();
            }
            PromptField::Amount => {
                draft.amount = Input::<String>::with_theme(&theme)
                    .with_prompt("Amount")
                    .validate_with(|s: &String| {
                        crate::form::parse_amount(s)
                            .map(|_| ())
                            .map_err(|e| e.to_string())
                    })
                    .interact_text()?;
            }
            PromptField::Currency => {
                let codes = Currency::ALL.map(|c| c.code());
                let idx = Select::with_theme(&theme)
                    .with_prompt("Currency")
                    .items(&codes)
                    .default(
                        Currency::ALL
                            .iter()
                            .position(|c| *c == draft.currency)
                            .unwrap_or(0),
                    )
                    .interact()?;
                draft.currency = Currency::ALL[idx];
            }
            PromptField::Date => {
                draft.date = Input::<String>::with_theme(&theme)
                    .with_prompt("Date")
                    .with_initial_text(draft.date.clone())
                    .interact_text()?;
            }
            PromptField::Description => {
                draft.description = Input::<String>::with_theme(&theme)
                    .with_prompt("Description")
                    .allow_empty(true)
                    .interact_text()?;
            }
        }
    }
    Ok(())
}

fn list<S: BlobStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions recorded yet");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Amount", "CCY", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
}

/// Ledger rows in stored (newest first) order; income is signed `+`, expenses `-`.
pub fn query_rows<S: BlobStore>(ledger: &Ledger<S>, limit: Option<usize>) -> Vec<TransactionRow> {
    ledger
        .transactions()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: match t.kind {
                TxType::Income => format!("+{}", fmt_amount(&t.amount)),
                TxType::Expense => fmt_amount(&t.signed_amount()),
            },
            currency: t.currency.to_string(),
            description: t.description.clone(),
        })
        .collect()
}

pub fn remove<S: BlobStore, C: Confirm + ?Sized>(
    ledger: &mut Ledger<S>,
    sub: &clap::ArgMatches,
    confirmer: &C,
) -> Result<Option<usize>> {
    let id = *sub.get_one::<i64>("id").context("missing id")?;
    let outcome = ledger.remove_with(id, confirmer)?;
    match outcome {
        None => println!("Kept record {}", id),
        Some(0) => println!("No record with id {}", id),
        Some(_) => println!("Removed record {}", id),
    }
    Ok(outcome)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::confirm::Confirm;
use crate::error::{LedgerError, Result};
use crate::models::Transaction;
use crate::store::{BlobStore, LEDGER_KEY};
use crate::summary::Summary;

/// Proof that deletion of `id` was requested. Only [`Ledger::request_delete`]
/// mints one, and [`Ledger::confirm_delete`] consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the token cancels the deletion"]
pub struct ConfirmationToken {
    id: i64,
}

impl ConfirmationToken {
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// Newest-first list of transactions mirrored into a [`BlobStore`].
///
/// Stored records that do not decode (for example a `null` amount) are kept
/// verbatim and written back after the readable ones, so a rewrite never
/// drops them.
pub struct Ledger<S: BlobStore> {
    store: S,
    transactions: Vec<Transaction>,
    unreadable: Vec<Value>,
}

impl<S: BlobStore> Ledger<S> {
    /// Reads the stored blob. A missing blob, or one that is not a JSON
    /// array, yields an empty ledger.
    pub fn load(store: S) -> Self {
        let (transactions, unreadable) = match store.read(LEDGER_KEY) {
            Ok(Some(data)) => match serde_json::from_str::<Vec<Value>>(&data) {
                Ok(values) => decode_records(values),
                Err(e) => {
                    warn!(error = %e, location = %store.describe(), "ledger blob is not valid, starting empty");
                    (Vec::new(), Vec::new())
                }
            },
            Ok(None) => {
                debug!(location = %store.describe(), "no ledger stored yet");
                (Vec::new(), Vec::new())
            }
            Err(e) => {
                warn!(error = %e, location = %store.describe(), "could not read ledger, starting empty");
                (Vec::new(), Vec::new())
            }
        };
        debug!(
            count = transactions.len(),
            unreadable = unreadable.len(),
            "ledger loaded"
        );
        Self {
            store,
            transactions,
            unreadable,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Stored records that could not be decoded, in stored order.
    pub fn unreadable(&self) -> &[Value] {
        &self.unreadable
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> Result<Summary> {
        Summary::compute(&self.transactions)
    }

    /// Next id for a record created at `now_millis`: the clock value, bumped
    /// past the newest existing id so ids stay unique and increasing.
    pub fn next_id(&self, now_millis: i64) -> Result<i64> {
        let newest = self
            .transactions
            .iter()
            .map(|t| t.id)
            .chain(self.unreadable.iter().filter_map(raw_id))
            .max();
        match newest {
            Some(max) if now_millis <= max => max.checked_add(1).ok_or(LedgerError::IdExhausted),
            _ => Ok(now_millis),
        }
    }

    /// Prepends `tx` and rewrites the stored blob.
    pub fn append(&mut self, tx: Transaction) -> Result<()> {
        info!(id = tx.id, kind = %tx.kind, amount = %tx.amount, currency = %tx.currency, "appending transaction");
        self.transactions.insert(0, tx);
        if let Err(e) = self.save() {
            self.transactions.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// First step of a deletion. Unknown ids still get a token; confirming it
    /// leaves the ledger unchanged.
    pub fn request_delete(&self, id: i64) -> ConfirmationToken {
        if self.get(id).is_none() {
            debug!(id, "deletion requested for unknown id");
        }
        ConfirmationToken { id }
    }

    /// Second step of a deletion: drops every record with the token's id and
    /// rewrites the blob. Returns the number of records removed.
    pub fn confirm_delete(&mut self, token: ConfirmationToken) -> Result<usize> {
        let before = (self.transactions.clone(), self.unreadable.clone());
        self.transactions.retain(|t| t.id != token.id);
        self.unreadable.retain(|v| raw_id(v) != Some(token.id));
        let removed =
            before.0.len() + before.1.len() - self.transactions.len() - self.unreadable.len();
        if let Err(e) = self.save() {
            (self.transactions, self.unreadable) = before;
            return Err(e);
        }
        info!(id = token.id, removed, "deletion confirmed");
        Ok(removed)
    }

    /// Asks `confirmer` before deleting `id`. Returns `None` when the user
    /// declined, otherwise the number of records removed.
    pub fn remove_with<C: Confirm + ?Sized>(
        &mut self,
        id: i64,
        confirmer: &C,
    ) -> Result<Option<usize>> {
        let token = self.request_delete(id);
        let prompt = match self.get(id) {
            Some(t) => format!(
                "Delete {} {} {} {} ({}) on {}?",
                t.kind, t.category, t.amount, t.currency, t.id, t.date
            ),
            None => format!("Delete record {}?", id),
        };
        if !confirmer.confirm(&prompt)? {
            info!(id, "deletion declined");
            return Ok(None);
        }
        self.confirm_delete(token).map(Some)
    }

    fn save(&self) -> Result<()> {
        let mut records = self
            .transactions
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()?;
        records.extend(self.unreadable.iter().cloned());
        let data = serde_json::to_string(&records)?;
        self.store.write(LEDGER_KEY, &data)?;
        debug!(count = records.len(), location = %self.store.describe(), "ledger saved");
        Ok(())
    }
}

fn decode_records(values: Vec<Value>) -> (Vec<Transaction>, Vec<Value>) {
    let mut transactions = Vec::with_capacity(values.len());
    let mut unreadable = Vec::new();
    for value in values {
        match Transaction::deserialize(&value) {
            Ok(tx) => transactions.push(tx),
            Err(e) => {
                warn!(error = %e, id = ?raw_id(&value), "keeping unreadable record as stored");
                unreadable.push(value);
            }
        }
    }
    (transactions, unreadable)
}

fn raw_id(value: &Value) -> Option<i64> {
    value.get("id").and_then(Value::as_i64)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the ledger library. Command handlers wrap these in
/// `anyhow` with extra context.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(String),
    #[error("Totals for {0} are too large to compute")]
    AmountOverflow(String),
    #[error("No transaction id left after {}", i64::MAX)]
    IdExhausted,
    #[error("A category is required")]
    MissingCategory,
    #[error("Category '{category}' is not valid for {kind} entries")]
    UnknownCategory { category: String, kind: String },
    #[error("Unknown currency '{0}' (use TWD|JPY|USD|CNY)")]
    UnknownCurrency(String),
    #[error("Unknown transaction type '{0}' (use income|expense)")]
    UnknownType(String),
    #[error("Unknown storage backend '{0}' (use json|sqlite)")]
    UnknownBackend(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

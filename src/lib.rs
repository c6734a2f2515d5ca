// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod db;
pub mod error;
pub mod form;
pub mod ledger;
pub mod models;
pub mod store;
pub mod summary;
pub mod utils;

pub use error::{LedgerError, Result};
pub use ledger::{ConfirmationToken, Ledger};
pub use models::{Currency, Transaction, TxType};
pub use summary::Summary;

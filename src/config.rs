// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::db;
use crate::error::LedgerError;
use crate::store::{BlobStore, JsonFileStore, SqliteStore};

pub const DATA_DIR_ENV: &str = "TALLYBOOK_DATA_DIR";
pub const BACKEND_ENV: &str = "TALLYBOOK_BACKEND";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Json => f.write_str("json"),
            Backend::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Backend::Json),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(LedgerError::UnknownBackend(other.to_string())),
        }
    }
}

/// Where and how the ledger is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub backend: Backend,
}

impl Settings {
    /// Flags (which already fold in their env vars) win over the platform
    /// default directory.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let data_dir = match m.get_one::<String>("data-dir") {
            Some(dir) => PathBuf::from(dir),
            None => db::default_data_dir()?,
        };
        let backend = match m.get_one::<String>("backend") {
            Some(b) => b.parse::<Backend>()?,
            None => Backend::default(),
        };
        Ok(Self { data_dir, backend })
    }

    pub fn open_store(&self) -> Result<Box<dyn BlobStore>> {
        let store: Box<dyn BlobStore> = match self.backend {
            Backend::Json => Box::new(
                JsonFileStore::new(&self.data_dir).with_context(|| {
                    format!("Failed to prepare data dir {}", self.data_dir.display())
                })?,
            ),
            Backend::Sqlite => {
                let conn = db::open_or_init(&self.data_dir)?;
                Box::new(SqliteStore::new(conn)?)
            }
        };
        tracing::debug!(backend = %self.backend, location = %store.describe(), "store opened");
        Ok(store)
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value blob persistence. The ledger keeps its whole state in one
//! serialized string, so a backend only has to read and overwrite values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::Result;

/// Fixed key under which the ledger blob is stored.
pub const LEDGER_KEY: &str = "accounting-transactions";

/// A string-valued key-value store.
pub trait BlobStore {
    /// Returns `None` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Replaces any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
    /// Human readable location, for `init` and log lines.
    fn describe(&self) -> String;
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        write_file(&self.path_for(key), value)
    }

    fn describe(&self) -> String {
        self.path_for(LEDGER_KEY).display().to_string()
    }
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Values kept in the `kv` table of a SQLite database.
pub struct SqliteStore {
    conn: Connection,
    label: String,
}

impl SqliteStore {
    /// Wraps an open connection; the `kv` table is created if missing.
    pub fn new(conn: Connection) -> Result<Self> {
        crate::db::init_schema(&conn)?;
        let label = conn
            .path()
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .unwrap_or_else(|| ":memory:".to_string());
        Ok(Self { conn, label })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::new(Connection::open_in_memory()?)
    }
}

impl BlobStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} (key '{}')", self.label, LEDGER_KEY)
    }
}

/// Process-local store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

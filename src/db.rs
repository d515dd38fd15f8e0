// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SQLite data file: creation, validation and per-entity access.

use crate::collection::{CategoryList, TypeList};
use crate::error::{BiclogError, Result};
use crate::models::{BicycleType, Category, Entity};
use crate::repository::Repository;
use rusqlite::{Connection, ErrorCode, OpenFlags, OptionalExtension, params};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub const APPLICATION: &str = "biclog";
pub const SCHEMA_VERSION: &str = "1";

const REQUIRED_TABLES: [&str; 5] = [
    "properties",
    "bicycle_types",
    "categories",
    "bicycles",
    "trips",
];

/// One open data file. The connection is released on [`DataFile::close`]
/// or when the value goes out of scope, whichever comes first.
pub struct DataFile {
    path: PathBuf,
    conn: Option<Connection>,
}

impl DataFile {
    /// Creates `path` and writes the schema. Refuses to touch an existing file.
    pub fn create_new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => BiclogError::AlreadyExists(path.clone()),
                _ => BiclogError::Io(e),
            })?;

        let created = Connection::open(&path)
            .map_err(BiclogError::from)
            .and_then(|mut conn| {
                init_schema(&mut conn)?;
                Ok(conn)
            });
        match created {
            Ok(conn) => Ok(Self {
                path,
                conn: Some(conn),
            }),
            Err(e) => {
                // leave nothing half-initialised behind
                let _ = fs::remove_file(&path);
                Err(e)
            }
        }
    }

    /// Opens an existing data file and checks it carries the biclog schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(BiclogError::DataFileNotFound(path));
        }
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        verify_schema(&conn, &path)?;
        Ok(Self {
            path,
            conn: Some(conn),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Releases the connection. Calling it again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => conn.close().map_err(|(_, e)| BiclogError::Storage(e)),
            None => Ok(()),
        }
    }

    pub fn repository<E: Entity>(&self) -> Result<Repository<'_, E>> {
        self.conn
            .as_ref()
            .map(Repository::new)
            .ok_or(BiclogError::Closed)
    }

    pub fn type_add(&self, name: &str) -> Result<BicycleType> {
        self.repository::<BicycleType>()?.add(name)
    }

    pub fn type_list(&self) -> Result<TypeList> {
        self.repository::<BicycleType>()?.list()
    }

    pub fn type_get(&self, id: i64) -> Result<BicycleType> {
        self.repository::<BicycleType>()?.get(id)
    }

    pub fn type_update(&self, bicycle_type: &BicycleType) -> Result<()> {
        self.repository::<BicycleType>()?.update(bicycle_type)
    }

    pub fn type_delete(&self, bicycle_type: &BicycleType) -> Result<()> {
        self.repository::<BicycleType>()?.delete(bicycle_type)
    }

    pub fn category_add(&self, name: &str) -> Result<Category> {
        self.repository::<Category>()?.add(name)
    }

    pub fn category_list(&self) -> Result<CategoryList> {
        self.repository::<Category>()?.list()
    }

    pub fn category_get(&self, id: i64) -> Result<Category> {
        self.repository::<Category>()?.get(id)
    }

    pub fn category_update(&self, category: &Category) -> Result<()> {
        self.repository::<Category>()?.update(category)
    }

    pub fn category_delete(&self, category: &Category) -> Result<()> {
        self.repository::<Category>()?.delete(category)
    }
}

fn init_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        r#"
    CREATE TABLE properties(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE bicycle_types(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );

    CREATE TABLE categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );

    -- placeholders, not exercised yet
    CREATE TABLE bicycles(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        producer TEXT,
        model TEXT,
        type_id INTEGER
    );

    CREATE TABLE trips(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        bicycle_id INTEGER,
        date TEXT,
        title TEXT,
        category_id INTEGER,
        distance REAL,
        duration TEXT,
        description TEXT
    );
    "#,
    )?;
    tx.execute(
        "INSERT INTO properties(key, value) VALUES ('application', ?1), ('schema_version', ?2)",
        params![APPLICATION, SCHEMA_VERSION],
    )?;
    tx.commit()?;
    Ok(())
}

fn verify_schema(conn: &Connection, path: &Path) -> Result<()> {
    let invalid = || BiclogError::InvalidFormat(path.to_path_buf());

    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table'")
        .map_err(|e| classify(e, path))?;
    let tables = stmt
        .query_map([], |r| r.get::<_, String>(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(|e| classify(e, path))?;
    if !REQUIRED_TABLES
        .iter()
        .all(|t| tables.iter().any(|name| name == t))
    {
        return Err(invalid());
    }

    let marker: Option<String> = conn
        .query_row(
            "SELECT value FROM properties WHERE key='application'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    if marker.as_deref() != Some(APPLICATION) {
        return Err(invalid());
    }
    Ok(())
}

fn classify(e: rusqlite::Error, path: &Path) -> BiclogError {
    match e {
        rusqlite::Error::SqliteFailure(ref err, _) if err.code == ErrorCode::NotADatabase => {
            BiclogError::InvalidFormat(path.to_path_buf())
        }
        other => BiclogError::Storage(other),
    }
}

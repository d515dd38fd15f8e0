// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::collection::EntityList;
use crate::error::{BiclogError, Result};
use crate::models::Entity;
use rusqlite::{Connection, OptionalExtension, params};
use std::marker::PhantomData;

/// Add/List/Get/Update/Delete for one entity kind.
///
/// Every call is a single SQL statement, so a failure never leaves
/// the touched row half written.
pub struct Repository<'c, E> {
    conn: &'c Connection,
    _kind: PhantomData<E>,
}

impl<'c, E: Entity> Repository<'c, E> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _kind: PhantomData,
        }
    }

    pub fn add(&self, name: &str) -> Result<E> {
        let name = validate_name::<E>(name)?;
        self.conn.execute(
            &format!("INSERT INTO {}(name) VALUES (?1)", E::TABLE),
            params![name],
        )?;
        Ok(E::new(self.conn.last_insert_rowid(), name.to_string()))
    }

    pub fn list(&self) -> Result<EntityList<E>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, name FROM {} ORDER BY id", E::TABLE))?;
        let rows = stmt.query_map([], |r| Ok(E::new(r.get(0)?, r.get(1)?)))?;
        let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(EntityList::new(items))
    }

    /// Point lookup; `NotFound` when no row has `id`.
    pub fn get(&self, id: i64) -> Result<E> {
        self.conn
            .query_row(
                &format!("SELECT id, name FROM {} WHERE id=?1", E::TABLE),
                params![id],
                |r| Ok(E::new(r.get(0)?, r.get(1)?)),
            )
            .optional()?
            .ok_or(BiclogError::NotFound {
                entity: E::KIND,
                id,
            })
    }

    pub fn update(&self, entity: &E) -> Result<()> {
        let name = validate_name::<E>(entity.name())?;
        let changed = self.conn.execute(
            &format!("UPDATE {} SET name=?1 WHERE id=?2", E::TABLE),
            params![name, entity.id()],
        )?;
        self.ensure_touched(changed, entity.id())
    }

    pub fn delete(&self, entity: &E) -> Result<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id=?1", E::TABLE),
            params![entity.id()],
        )?;
        self.ensure_touched(changed, entity.id())
    }

    fn ensure_touched(&self, changed: usize, id: i64) -> Result<()> {
        if changed == 0 {
            return Err(BiclogError::NotFound {
                entity: E::KIND,
                id,
            });
        }
        Ok(())
    }
}

/// Names are stored exactly as given; only the empty string is refused.
fn validate_name<E: Entity>(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(BiclogError::Validation(format!(
            "{} name is required",
            E::KIND
        )));
    }
    Ok(name)
}

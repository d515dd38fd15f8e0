// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One call per CLI verb. Each opens the data file, runs a single
//! operation and closes the file again, on error paths too.

use crate::collection::{CategoryList, EntityList, TypeList};
use crate::db::DataFile;
use crate::error::Result;
use crate::models::{BicycleType, Category, Entity};
use std::path::Path;

pub fn init(path: &Path) -> Result<()> {
    let mut file = DataFile::create_new(path)?;
    file.close()
}

fn with_data_file<T>(path: &Path, op: impl FnOnce(&DataFile) -> Result<T>) -> Result<T> {
    let mut file = DataFile::open(path)?;
    run_scoped(&mut file, op)
}

/// Runs `op` against `file`, then closes `file` whatever the outcome.
///
/// An error from `op` takes precedence over a failed close. When `op`
/// succeeded, its write is already committed; a failure to close is
/// still returned so the caller learns the handle did not shut down
/// cleanly.
pub fn run_scoped<T>(file: &mut DataFile, op: impl FnOnce(&DataFile) -> Result<T>) -> Result<T> {
    let out = op(&*file);
    let closed = file.close();
    let out = out?;
    closed?;
    Ok(out)
}

pub fn add<E: Entity>(path: &Path, name: &str) -> Result<E> {
    with_data_file(path, |file| file.repository::<E>()?.add(name))
}

pub fn list<E: Entity>(path: &Path) -> Result<EntityList<E>> {
    with_data_file(path, |file| file.repository::<E>()?.list())
}

/// Renames the entity with `id`, returning `(old_name, new_name)`.
pub fn edit<E: Entity>(path: &Path, id: i64, new_name: &str) -> Result<(String, String)> {
    with_data_file(path, |file| {
        let repo = file.repository::<E>()?;
        let mut entity = repo.get(id)?;
        let old_name = entity.name().to_string();
        entity.set_name(new_name.to_string());
        repo.update(&entity)?;
        Ok((old_name, entity.name().to_string()))
    })
}

/// Removes the entity with `id` and hands back what was deleted.
pub fn delete<E: Entity>(path: &Path, id: i64) -> Result<E> {
    with_data_file(path, |file| {
        let repo = file.repository::<E>()?;
        let entity = repo.get(id)?;
        repo.delete(&entity)?;
        Ok(entity)
    })
}

pub fn type_add(path: &Path, name: &str) -> Result<BicycleType> {
    add(path, name)
}

pub fn type_list(path: &Path) -> Result<TypeList> {
    list(path)
}

pub fn type_edit(path: &Path, id: i64, new_name: &str) -> Result<(String, String)> {
    edit::<BicycleType>(path, id, new_name)
}

pub fn type_delete(path: &Path, id: i64) -> Result<BicycleType> {
    delete(path, id)
}

pub fn category_add(path: &Path, name: &str) -> Result<Category> {
    add(path, name)
}

pub fn category_list(path: &Path) -> Result<CategoryList> {
    list(path)
}

pub fn category_edit(path: &Path, id: i64, new_name: &str) -> Result<(String, String)> {
    edit::<Category>(path, id, new_name)
}

pub fn category_delete(path: &Path, id: i64) -> Result<Category> {
    delete(path, id)
}

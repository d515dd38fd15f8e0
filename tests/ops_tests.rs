// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use biclog::BiclogError;
use biclog::db::DataFile;
use biclog::models::BicycleType;
use biclog::ops;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bikes.db");
    ops::init(&path).unwrap();
    (dir, path)
}

fn seeded() -> (TempDir, PathBuf) {
    let (dir, path) = setup();
    ops::type_add(&path, "Road").unwrap();
    ops::type_add(&path, "MTB").unwrap();
    (dir, path)
}

fn bt(id: i64, name: &str) -> BicycleType {
    BicycleType {
        id,
        name: name.into(),
    }
}

#[test]
fn init_then_list_is_empty() {
    let (_dir, path) = setup();
    assert!(ops::type_list(&path).unwrap().is_empty());
}

#[test]
fn init_twice_fails() {
    let (_dir, path) = setup();
    let err = ops::init(&path).unwrap_err();
    assert!(matches!(err, BiclogError::AlreadyExists(_)));
}

#[test]
fn add_then_list_in_id_order() {
    let (_dir, path) = seeded();
    let list = ops::type_list(&path).unwrap();
    assert_eq!(list.as_slice(), &[bt(1, "Road"), bt(2, "MTB")]);
}

#[test]
fn add_returns_stored_record() {
    let (_dir, path) = seeded();
    let before = ops::type_list(&path).unwrap();
    let max_id = before.iter().map(|t| t.id).max().unwrap();

    let added = ops::type_add(&path, "Gravel").unwrap();
    assert!(added.id > max_id);

    let after = ops::type_list(&path).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.iter().filter(|t| t.id == added.id).count(), 1);
    assert_eq!(after.get_with_id(added.id).unwrap().name, "Gravel");
}

#[test]
fn add_empty_name_leaves_store_unchanged() {
    let (_dir, path) = seeded();
    let before = ops::type_list(&path).unwrap();
    let err = ops::type_add(&path, "").unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(ops::type_list(&path).unwrap(), before);
}

#[test]
fn edit_renames_only_target() {
    let (_dir, path) = seeded();
    let (old, new) = ops::type_edit(&path, 1, "Gravel").unwrap();
    assert_eq!((old.as_str(), new.as_str()), ("Road", "Gravel"));
    assert_eq!(
        ops::type_list(&path).unwrap().as_slice(),
        &[bt(1, "Gravel"), bt(2, "MTB")]
    );
}

#[test]
fn edit_is_idempotent() {
    let (_dir, path) = seeded();
    ops::type_edit(&path, 2, "Enduro").unwrap();
    let once = ops::type_list(&path).unwrap();
    let (old, new) = ops::type_edit(&path, 2, "Enduro").unwrap();
    assert_eq!(old, new);
    assert_eq!(ops::type_list(&path).unwrap(), once);
}

#[test]
fn edit_and_delete_unknown_id_leave_store_unchanged() {
    let (_dir, path) = seeded();
    let before = ops::type_list(&path).unwrap();

    let err = ops::type_edit(&path, 99, "Gravel").unwrap_err();
    assert!(matches!(err, BiclogError::NotFound { id: 99, .. }));
    let err = ops::type_delete(&path, 99).unwrap_err();
    assert!(matches!(err, BiclogError::NotFound { id: 99, .. }));

    assert_eq!(ops::type_list(&path).unwrap(), before);
}

#[test]
fn edit_to_empty_name_is_rejected() {
    let (_dir, path) = seeded();
    let err = ops::type_edit(&path, 1, "").unwrap_err();
    assert!(matches!(err, BiclogError::Validation(_)));
    assert_eq!(ops::type_list(&path).unwrap().get_with_id(1).unwrap().name, "Road");
}

#[test]
fn add_and_edit_keep_surrounding_spaces() {
    let (_dir, path) = setup();
    let added = ops::type_add(&path, " Road ").unwrap();
    assert_eq!(added, bt(1, " Road "));
    assert_eq!(ops::type_list(&path).unwrap().as_slice(), &[bt(1, " Road ")]);

    let (old, new) = ops::type_edit(&path, 1, "  Gravel").unwrap();
    assert_eq!((old.as_str(), new.as_str()), (" Road ", "  Gravel"));
    assert_eq!(ops::type_list(&path).unwrap().get_with_id(1).unwrap().name, "  Gravel");
}

#[test]
fn scoped_run_closes_handle_on_error() {
    let (_dir, path) = seeded();
    let mut file = DataFile::open(&path).unwrap();
    let err = ops::run_scoped(&mut file, |f| f.type_get(99)).unwrap_err();
    assert!(err.is_not_found());
    assert!(!file.is_open());
    assert!(matches!(file.type_list().unwrap_err(), BiclogError::Closed));
}

#[test]
fn scoped_run_closes_handle_on_success() {
    let (_dir, path) = seeded();
    let mut file = DataFile::open(&path).unwrap();
    let added = ops::run_scoped(&mut file, |f| f.type_add("Gravel")).unwrap();
    assert!(!file.is_open());
    assert_eq!(ops::type_list(&path).unwrap().get_with_id(added.id).unwrap(), added);
}

#[test]
fn delete_returns_removed_record() {
    let (_dir, path) = seeded();
    let removed = ops::type_delete(&path, 1).unwrap();
    assert_eq!(removed, bt(1, "Road"));

    let list = ops::type_list(&path).unwrap();
    assert!(list.iter().all(|t| t.id != 1));
    assert!(ops::type_delete(&path, 1).unwrap_err().is_not_found());
}

#[test]
fn operations_on_missing_file_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");
    assert!(matches!(
        ops::type_list(&path).unwrap_err(),
        BiclogError::DataFileNotFound(_)
    ));
    assert!(ops::type_add(&path, "Road").is_err());
    assert!(!path.exists());
}

#[test]
fn category_verbs_mirror_type_verbs() {
    let (_dir, path) = setup();
    let commute = ops::category_add(&path, "Commute").unwrap();
    ops::category_add(&path, "Tour").unwrap();
    let (old, new) = ops::category_edit(&path, commute.id, "Daily commute").unwrap();
    assert_eq!(old, "Commute");
    assert_eq!(new, "Daily commute");

    let removed = ops::category_delete(&path, commute.id).unwrap();
    assert_eq!(removed.name, "Daily commute");

    let names: Vec<_> = ops::category_list(&path)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Tour"]);
    assert!(ops::type_list(&path).unwrap().is_empty());
}

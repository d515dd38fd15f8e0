// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// A named record stored in its own table of the data file.
///
/// Every entity kind shares the `(id, name)` shape so that one
/// [`Repository`](crate::repository::Repository) serves all of them.
pub trait Entity: Clone {
    /// Table holding the rows.
    const TABLE: &'static str;
    /// Human readable kind, used in messages ("bicycle type").
    const KIND: &'static str;
    const PLURAL: &'static str;

    fn new(id: i64, name: String) -> Self;
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BicycleType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

macro_rules! named_entity {
    ($ty:ty, $table:literal, $kind:literal, $plural:literal) => {
        impl Entity for $ty {
            const TABLE: &'static str = $table;
            const KIND: &'static str = $kind;
            const PLURAL: &'static str = $plural;

            fn new(id: i64, name: String) -> Self {
                Self { id, name }
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }
        }
    };
}

named_entity!(BicycleType, "bicycle_types", "bicycle type", "bicycle types");
named_entity!(Category, "categories", "category", "categories");

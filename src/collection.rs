// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{BiclogError, Result};
use crate::models::{BicycleType, Category, Entity};
use serde::Serialize;

pub const ID_HEADER: &str = "ID";
pub const NAME_HEADER: &str = "NAME";
pub const SEPARATOR: &str = "  ";

/// Entities in the order storage returned them (id ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityList<E> {
    items: Vec<E>,
}

pub type TypeList = EntityList<BicycleType>;
pub type CategoryList = EntityList<Category>;

impl<E: Entity> EntityList<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Returns a copy of the entity with `id`.
    pub fn get_with_id(&self, id: i64) -> Result<E> {
        self.items
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(BiclogError::NotFound {
                entity: E::KIND,
                id,
            })
    }

    /// Column widths covering the headers and every row of the list.
    pub fn format_for_display(&self) -> DisplayLayout {
        let id_width = self
            .items
            .iter()
            .map(|e| e.id().to_string().chars().count())
            .chain(std::iter::once(ID_HEADER.len()))
            .max()
            .unwrap_or(ID_HEADER.len());
        let name_width = self
            .items
            .iter()
            .map(|e| e.name().chars().count())
            .chain(std::iter::once(NAME_HEADER.len()))
            .max()
            .unwrap_or(NAME_HEADER.len());
        DisplayLayout {
            id_width,
            name_width,
        }
    }

    /// Header line followed by one line per entity.
    pub fn render(&self) -> Vec<String> {
        let layout = self.format_for_display();
        std::iter::once(layout.header())
            .chain(self.items.iter().map(|e| layout.row(e)))
            .collect()
    }
}

impl<E> IntoIterator for EntityList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a EntityList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Two aligned columns: id right-aligned, name left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    pub id_width: usize,
    pub name_width: usize,
}

impl DisplayLayout {
    pub fn header(&self) -> String {
        self.line(ID_HEADER, NAME_HEADER)
    }

    pub fn row<E: Entity>(&self, entity: &E) -> String {
        self.line(&entity.id().to_string(), entity.name())
    }

    fn line(&self, id: &str, name: &str) -> String {
        let pad = self.name_width.saturating_sub(name.chars().count());
        format!(
            "{:>iw$}{}{}{}",
            id,
            SEPARATOR,
            name,
            " ".repeat(pad),
            iw = self.id_width
        )
    }
}

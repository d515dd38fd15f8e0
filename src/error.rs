// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed failures of the data file and its entities.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiclogError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("data file {} does not exist", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("file {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{} is not a biclog data file", .0.display())]
    InvalidFormat(PathBuf),

    #[error("data file is already closed")]
    Closed,

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BiclogError {
    /// Stable code, independent of the message wording.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DataFileNotFound(_) | Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::Closed => "CLOSED",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DataFileNotFound(_) | Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, BiclogError>;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the notification archive
//!
//! Lookups and removals that match nothing are not errors; only malformed
//! input, bad configuration and I/O failures surface here.

use thiserror::Error;

/// Main error type for archive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive was constructed with a zero capacity
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    /// A notification handed to `record` is missing required fields
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

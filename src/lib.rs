// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bounded, multi-user notification history archive.
//!
//! Records notifications as they are removed from the shade into a
//! fixed-capacity ring, honouring per-user history enablement, and hands out
//! ordered snapshots for display.
//!
//! Modules:
//! - `history`: the archive, its ring buffer, entry types and query options
//! - `config`: JSON settings (capacity, initial enablement, logging)
//! - `replay`: JSONL operation scripts driven by the CLI
//! - `cli`: clap argument definitions for the `notification-archive` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod replay;

pub use error::{ArchiveError, Result};
pub use history::{HistoryArchive, HistoryEntry, SortOrder, UserId};

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Notification history
//!
//! Keeps a bounded, in-memory record of notifications removed from the
//! shade, gated per user and queryable newest or oldest first.

pub mod archive;
pub mod entry;
pub mod query;
pub mod ring;

pub use archive::{HistoryArchive, DUMP_LIMIT};
pub use entry::{ArchivedNotification, CancelReason, HistoryEntry, UserId};
pub use query::{ArchiveQuery, DumpFilter, SortOrder};
pub use ring::RingBuffer;

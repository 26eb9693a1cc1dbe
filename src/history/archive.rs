// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bounded notification history archive
//!
//! Holds the most recent notifications removed from the shade, for every user
//! whose history is enabled. Every operation runs under a single lock, so a
//! reader never sees a buffer that is halfway through a purge.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::config::ArchiveSettings;
use crate::error::{ArchiveError, Result};

use super::entry::{ArchivedNotification, CancelReason, HistoryEntry, UserId};
use super::query::{ArchiveQuery, DumpFilter, SortOrder};
use super::ring::RingBuffer;

/// Maximum number of entries written by [`HistoryArchive::dump`]
pub const DUMP_LIMIT: usize = 5;

#[derive(Debug)]
struct ArchiveState {
    buffer: RingBuffer<ArchivedNotification>,
    enabled: HashMap<UserId, bool>,
}

/// Fixed-capacity, per-user gated archive of removed notifications
#[derive(Debug)]
pub struct HistoryArchive {
    capacity: usize,
    /// Enablement assumed for users never passed to `update_history_enabled`
    default_enabled: bool,
    state: Mutex<ArchiveState>,
}

impl HistoryArchive {
    /// Create an archive holding at most `capacity` entries.
    ///
    /// History starts disabled for every user.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_default(capacity, false)
    }

    /// Create an archive with an explicit enablement default for unknown users
    pub fn with_default(capacity: usize, default_enabled: bool) -> Result<Self> {
        if capacity == 0 {
            return Err(ArchiveError::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            default_enabled,
            state: Mutex::new(ArchiveState {
                buffer: RingBuffer::new(capacity),
                enabled: HashMap::new(),
            }),
        })
    }

    /// Build an archive from configuration, seeding the enablement map
    pub fn from_settings(settings: &ArchiveSettings) -> Result<Self> {
        let archive = Self::with_default(settings.capacity, settings.default_history_enabled)?;
        {
            let mut state = archive.lock();
            for user in &settings.enabled_users {
                state.enabled.insert(UserId(*user).normalized(), true);
            }
            for user in &settings.disabled_users {
                state.enabled.insert(UserId(*user).normalized(), false);
            }
        }
        Ok(archive)
    }

    fn lock(&self) -> MutexGuard<'_, ArchiveState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Archive lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn enabled_in(&self, state: &ArchiveState, user: UserId) -> bool {
        state
            .enabled
            .get(&user.normalized())
            .copied()
            .unwrap_or(self.default_enabled)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    /// Whether history is currently recorded for `user`'s bucket
    pub fn is_history_enabled(&self, user: UserId) -> bool {
        let state = self.lock();
        self.enabled_in(&state, user)
    }

    /// Turn history on or off for a user.
    ///
    /// Disabling a user that was enabled purges every archived entry in that
    /// user's bucket. Setting the flag to its current value changes nothing.
    /// `ALL` shares the system user's bucket.
    pub fn update_history_enabled(&self, user: UserId, enabled: bool) {
        let user = user.normalized();
        let mut state = self.lock();
        let previous = self.enabled_in(&state, user);
        state.enabled.insert(user, enabled);

        if enabled || !previous {
            return;
        }

        let purged = state
            .buffer
            .retain(|record| record.entry.normalized_user() != user);
        tracing::debug!(
            user = user.0,
            purged,
            "History disabled, purged archived entries"
        );
    }

    /// Archive a removed notification.
    ///
    /// Dropped silently when history is disabled for the entry's user bucket.
    /// When the archive is full the oldest entry is evicted.
    pub fn record(&self, entry: HistoryEntry, reason: CancelReason) -> Result<()> {
        if entry.key.is_empty() {
            return Err(ArchiveError::InvalidEntry(format!(
                "entry from package '{}' has an empty key",
                entry.package_name
            )));
        }
        if entry.package_name.is_empty() {
            return Err(ArchiveError::InvalidEntry(format!(
                "entry '{}' has an empty package name",
                entry.key
            )));
        }

        let mut state = self.lock();
        let bucket = entry.normalized_user();
        if !self.enabled_in(&state, bucket) {
            tracing::trace!(key = %entry.key, user = bucket.0, "History disabled, not archiving");
            return Ok(());
        }

        if let Some(evicted) = state.buffer.push(ArchivedNotification::new(entry, reason)) {
            tracing::trace!(key = %evicted.entry.key, "Archive full, evicted oldest entry");
        }
        Ok(())
    }

    /// Copy out up to `max_count` of the most recent entries.
    ///
    /// A `max_count` of zero means "up to capacity". No user filtering is
    /// applied.
    pub fn get_array(&self, max_count: usize, order: SortOrder) -> Vec<HistoryEntry> {
        self.query(&ArchiveQuery::new(max_count, order))
    }

    /// Copy out the most recent entries accepted by `query`, in its order
    pub fn query(&self, query: &ArchiveQuery) -> Vec<HistoryEntry> {
        let limit = if query.max_count == 0 {
            self.capacity
        } else {
            query.max_count
        };

        let state = self.lock();
        let mut selected: Vec<HistoryEntry> = state
            .buffer
            .iter()
            .rev()
            .filter(|record| query.accepts(record))
            .take(limit)
            .map(|record| record.entry.clone())
            .collect();
        drop(state);

        if query.order == SortOrder::OldestFirst {
            selected.reverse();
        }
        selected
    }

    /// Every archived record with its reason, oldest first
    pub fn snapshot(&self) -> Vec<ArchivedNotification> {
        self.lock().buffer.iter().cloned().collect()
    }

    /// Remove every entry posted by `package_name` for `user` on `channel_id`.
    ///
    /// Returns how many entries were removed; zero is not an error.
    pub fn remove_channel_notifications(
        &self,
        package_name: &str,
        user: UserId,
        channel_id: Option<&str>,
    ) -> Result<usize> {
        if package_name.is_empty() {
            return Err(ArchiveError::InvalidInput(
                "package name must not be empty".to_string(),
            ));
        }

        let removed = self
            .lock()
            .buffer
            .retain(|record| !record.entry.matches_channel(package_name, user, channel_id));
        if removed > 0 {
            tracing::debug!(
                package = package_name,
                user = user.0,
                channel = channel_id.unwrap_or("null"),
                removed,
                "Removed channel notifications from archive"
            );
        }
        Ok(removed)
    }

    /// Drop every archived entry, keeping enablement flags
    pub fn clear(&self) -> usize {
        self.lock().buffer.clear()
    }

    /// Render the newest matching entries for diagnostics
    pub fn dump(&self, filter: &DumpFilter) -> String {
        let state = self.lock();
        let mut matching = state
            .buffer
            .iter()
            .rev()
            .filter(|record| filter.matches(record));

        let mut out = String::new();
        for record in matching.by_ref().take(DUMP_LIMIT) {
            out.push_str(&format!(
                "    {} reason={}\n",
                record.entry, record.reason.0
            ));
        }
        if matching.next().is_some() {
            out.push_str("    ...\n");
        }
        out
    }
}

impl fmt::Display for HistoryArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        write!(
            f,
            "Archive ({} notification{})",
            n,
            if n == 1 { "" } else { "s" }
        )
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Archived notification records
//!
//! The archive treats everything here as opaque data: it only ever reads the
//! key, package, user and channel of an entry, and the reason code when a
//! query asks to skip snoozed notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User handle a notification was posted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// The system (owner) user
    pub const SYSTEM: UserId = UserId(0);
    /// Posted for every user on the device
    pub const ALL: UserId = UserId(-1);
    /// Whichever user is in the foreground
    pub const CURRENT: UserId = UserId(-2);

    /// Enablement bucket this user falls into.
    ///
    /// `ALL` is governed by the system user; every other id, `CURRENT`
    /// included, is its own bucket.
    pub fn normalized(self) -> UserId {
        if self == UserId::ALL {
            UserId::SYSTEM
        } else {
            self
        }
    }
}

impl From<i32> for UserId {
    fn from(raw: i32) -> Self {
        UserId(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a notification left the shade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CancelReason(pub i32);

impl CancelReason {
    pub const CLICK: CancelReason = CancelReason(1);
    pub const CANCEL: CancelReason = CancelReason(2);
    pub const CANCEL_ALL: CancelReason = CancelReason(3);
    pub const APP_CANCEL: CancelReason = CancelReason(8);
    pub const CHANNEL_BANNED: CancelReason = CancelReason(17);
    pub const SNOOZED: CancelReason = CancelReason(18);
    pub const TIMEOUT: CancelReason = CancelReason(19);

    pub fn is_snoozed(self) -> bool {
        self == CancelReason::SNOOZED
    }
}

impl From<i32> for CancelReason {
    fn from(raw: i32) -> Self {
        CancelReason(raw)
    }
}

/// One notification as handed to the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique key of the originating notification
    pub key: String,
    /// Owning package
    pub package_name: String,
    /// User the notification was posted for
    pub user_id: UserId,
    /// Channel the notification was posted to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Package-local notification id
    #[serde(default)]
    pub id: i32,
    /// Optional package-local tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// When the notification was posted
    #[serde(default = "Utc::now")]
    pub posted_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry with a key derived from user, package, id and tag
    pub fn new(
        package_name: impl Into<String>,
        id: i32,
        user_id: UserId,
        channel_id: Option<String>,
    ) -> Self {
        let package_name = package_name.into();
        let key = Self::derive_key(user_id, &package_name, id, None);
        Self {
            key,
            package_name,
            user_id,
            channel_id,
            id,
            tag: None,
            posted_at: Utc::now(),
        }
    }

    /// Build the `user|package|id|tag` key used when the caller supplies none
    pub fn derive_key(user_id: UserId, package_name: &str, id: i32, tag: Option<&str>) -> String {
        format!(
            "{}|{}|{}|{}",
            user_id,
            package_name,
            id,
            tag.unwrap_or("null")
        )
    }

    /// Replace the derived key with a caller-supplied one
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Attach a tag and re-derive the key to include it
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.key = Self::derive_key(self.user_id, &self.package_name, self.id, Some(&tag));
        self.tag = Some(tag);
        self
    }

    pub fn with_posted_at(mut self, posted_at: DateTime<Utc>) -> Self {
        self.posted_at = posted_at;
        self
    }

    /// Enablement bucket governing this entry
    pub fn normalized_user(&self) -> UserId {
        self.user_id.normalized()
    }

    /// True if the entry belongs to `package_name` / `user` / `channel_id`
    pub fn matches_channel(
        &self,
        package_name: &str,
        user: UserId,
        channel_id: Option<&str>,
    ) -> bool {
        self.normalized_user() == user.normalized()
            && self.package_name == package_name
            && self.channel_id.as_deref() == channel_id
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HistoryEntry(pkg={} user={} id={} tag={} key={} channel={})",
            self.package_name,
            self.user_id,
            self.id,
            self.tag.as_deref().unwrap_or("null"),
            self.key,
            self.channel_id.as_deref().unwrap_or("null"),
        )
    }
}

/// An entry together with the reason it was archived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedNotification {
    pub entry: HistoryEntry,
    pub reason: CancelReason,
    pub archived_at: DateTime<Utc>,
}

impl ArchivedNotification {
    pub fn new(entry: HistoryEntry, reason: CancelReason) -> Self {
        Self {
            entry,
            reason,
            archived_at: Utc::now(),
        }
    }
}

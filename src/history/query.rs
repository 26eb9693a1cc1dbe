// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Retrieval options for the archive

use serde::{Deserialize, Serialize};

use super::entry::{ArchivedNotification, UserId};

/// Order in which archived entries are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

impl SortOrder {
    pub fn from_oldest_first(oldest_first: bool) -> Self {
        if oldest_first {
            SortOrder::OldestFirst
        } else {
            SortOrder::NewestFirst
        }
    }
}

/// A filtered read of the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveQuery {
    /// Maximum entries to return; zero means up to capacity
    #[serde(default)]
    pub max_count: usize,
    #[serde(default)]
    pub order: SortOrder,
    /// Include entries archived because they were snoozed
    #[serde(default = "default_true")]
    pub include_snoozed: bool,
    /// Only return entries posted for one of these users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserId>>,
}

fn default_true() -> bool {
    true
}

impl Default for ArchiveQuery {
    fn default() -> Self {
        Self {
            max_count: 0,
            order: SortOrder::OldestFirst,
            include_snoozed: true,
            users: None,
        }
    }
}

impl ArchiveQuery {
    pub fn new(max_count: usize, order: SortOrder) -> Self {
        Self {
            max_count,
            order,
            ..Self::default()
        }
    }

    pub fn include_snoozed(mut self, include: bool) -> Self {
        self.include_snoozed = include;
        self
    }

    pub fn for_users(mut self, users: Vec<UserId>) -> Self {
        self.users = Some(users);
        self
    }

    pub(crate) fn accepts(&self, record: &ArchivedNotification) -> bool {
        if record.reason.is_snoozed() && !self.include_snoozed {
            return false;
        }
        match &self.users {
            Some(users) => users.contains(&record.entry.user_id),
            None => true,
        }
    }
}

/// Narrows a diagnostic dump to one package and/or user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpFilter {
    pub package_name: Option<String>,
    pub user: Option<UserId>,
}

impl DumpFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn package(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
            user: None,
        }
    }

    pub fn user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    pub(crate) fn matches(&self, record: &ArchivedNotification) -> bool {
        let package_ok = self
            .package_name
            .as_deref()
            .map(|pkg| pkg == record.entry.package_name)
            .unwrap_or(true);
        let user_ok = self
            .user
            .map(|user| user.normalized() == record.entry.normalized_user())
            .unwrap_or(true);
        package_ok && user_ok
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for the notification archive
//!
//! Handles loading and saving settings from ~/.notification-archive/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod migration;
pub mod schema;
mod validation;

/// Main settings structure, stored in ~/.notification-archive/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Archive sizing and initial per-user enablement
    #[serde(default)]
    pub archive: ArchiveSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Archive configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveSettings {
    /// Maximum number of archived notifications
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Whether users absent from the enablement map are recorded
    #[serde(default)]
    pub default_history_enabled: bool,

    /// Users whose history starts enabled
    #[serde(default = "default_enabled_users")]
    pub enabled_users: Vec<i32>,

    /// Users whose history starts disabled
    #[serde(default)]
    pub disabled_users: Vec<i32>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default tracing directive, e.g. "info" or "notification_archive=debug".
    /// `RUST_LOG` still takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

fn default_capacity() -> usize {
    250
}

fn default_enabled_users() -> Vec<i32> {
    // System and current user
    vec![0, -2]
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            default_history_enabled: false,
            enabled_users: default_enabled_users(),
            disabled_users: Vec::new(),
        }
    }
}

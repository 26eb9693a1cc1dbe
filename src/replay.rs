// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! JSONL operation scripts
//!
//! Each non-blank line of a script is one archive operation, e.g.
//!
//! ```text
//! {"op":"enable","user":0,"enabled":true}
//! {"op":"record","entry":{"key":"k1","package_name":"pkg","user_id":0},"reason":2}
//! {"op":"remove_channel","package":"pkg","user":0,"channel":"alerts"}
//! {"op":"clear"}
//! ```
//!
//! Lines starting with `#` are comments.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ArchiveError, Result};
use crate::history::{CancelReason, HistoryArchive, HistoryEntry, UserId};

/// A single scripted archive operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ArchiveCommand {
    Enable {
        user: UserId,
        enabled: bool,
    },
    Record {
        entry: HistoryEntry,
        #[serde(default = "default_reason")]
        reason: CancelReason,
    },
    RemoveChannel {
        package: String,
        user: UserId,
        #[serde(default)]
        channel: Option<String>,
    },
    Clear,
}

fn default_reason() -> CancelReason {
    CancelReason::CANCEL
}

/// Outcome of running a script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Operations executed
    pub commands: usize,
    /// Record operations submitted (stored or dropped by enablement)
    pub records: usize,
    /// Entries removed by channel removal or clear
    pub removed: usize,
}

/// Parse a JSONL script
pub fn parse_script(content: &str) -> Result<Vec<ArchiveCommand>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line.trim()).map_err(|e| {
                ArchiveError::InvalidInput(format!("script line {}: {}", index + 1, e))
            })
        })
        .collect()
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ArchiveCommand>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

/// Apply one operation, returning how many entries it removed
pub fn apply(archive: &HistoryArchive, command: ArchiveCommand) -> Result<usize> {
    match command {
        ArchiveCommand::Enable { user, enabled } => {
            archive.update_history_enabled(user, enabled);
            Ok(0)
        }
        ArchiveCommand::Record { entry, reason } => {
            archive.record(entry, reason)?;
            Ok(0)
        }
        ArchiveCommand::RemoveChannel {
            package,
            user,
            channel,
        } => archive.remove_channel_notifications(&package, user, channel.as_deref()),
        ArchiveCommand::Clear => Ok(archive.clear()),
    }
}

/// Run every operation in order, stopping at the first failure
pub fn run(archive: &HistoryArchive, commands: Vec<ArchiveCommand>) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();
    for command in commands {
        if matches!(command, ArchiveCommand::Record { .. }) {
            report.records += 1;
        }
        report.removed += apply(archive, command)?;
        report.commands += 1;
    }
    tracing::info!(
        commands = report.commands,
        records = report.records,
        removed = report.removed,
        "Replay finished"
    );
    Ok(report)
}

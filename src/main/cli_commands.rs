// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use serde::Serialize;

use notification_archive::cli::{ConfigArgs, ConfigCommands, OutputFormat, ReplayArgs};
use notification_archive::config::Settings;
use notification_archive::error::Result;
use notification_archive::history::{ArchiveQuery, HistoryArchive, HistoryEntry, SortOrder, UserId};
use notification_archive::replay::{self, ReplayReport};

#[derive(Serialize)]
struct ReplayOutput<'a> {
    capacity: usize,
    archived: usize,
    report: &'a ReplayReport,
    entries: &'a [HistoryEntry],
}

pub(super) fn run_replay(
    args: ReplayArgs,
    mut settings: Settings,
    format: &OutputFormat,
) -> Result<()> {
    if let Some(capacity) = args.capacity {
        settings.archive.capacity = capacity;
    }
    settings.validate()?;

    let archive = HistoryArchive::from_settings(&settings.archive)?;
    let commands = replay::load_script(&args.script)?;
    tracing::info!(
        "Replaying {} operations from {}",
        commands.len(),
        args.script.display()
    );
    let report = replay::run(&archive, commands)?;

    let order = SortOrder::from_oldest_first(!args.newest_first);
    let mut query =
        ArchiveQuery::new(args.limit, order).include_snoozed(!args.exclude_snoozed);
    if !args.users.is_empty() {
        query = query.for_users(args.users.into_iter().map(UserId).collect());
    }
    let entries = archive.query(&query);

    match format {
        OutputFormat::Json => {
            let output = ReplayOutput {
                capacity: archive.capacity(),
                archived: archive.len(),
                report: &report,
                entries: &entries,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            print!("{}", format_history(&archive.to_string(), &report, &entries));
        }
    }
    Ok(())
}

fn format_history(summary: &str, report: &ReplayReport, entries: &[HistoryEntry]) -> String {
    let mut out = format!(
        "\n{} after {} operations ({} records, {} removed)\n\n",
        summary, report.commands, report.records, report.removed
    );

    if entries.is_empty() {
        out.push_str("  (no archived notifications)\n\n");
        return out;
    }

    for entry in entries {
        let date = entry.posted_at.format("%Y-%m-%d %H:%M:%S");
        let channel = entry.channel_id.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "  {} | {} | user {} | {} | {}\n",
            entry.key, entry.package_name, entry.user_id, channel, date
        ));
    }
    out.push('\n');
    out
}

pub(super) fn run_config_command(
    args: ConfigArgs,
    settings: Settings,
    config_path: Option<PathBuf>,
    format: &OutputFormat,
) -> Result<()> {
    let path = config_path.unwrap_or_else(Settings::default_path);

    match args.command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
            OutputFormat::Text => {
                println!("\nSettings ({}):\n", path.display());
                println!("  capacity:                {}", settings.archive.capacity);
                println!(
                    "  default history enabled: {}",
                    settings.archive.default_history_enabled
                );
                println!("  enabled users:           {:?}", settings.archive.enabled_users);
                println!("  disabled users:          {:?}", settings.archive.disabled_users);
                println!("  log level:               {}", settings.log_directive());
                println!();
            }
        },

        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::Init { force } => {
            let defaults = Settings::default();
            if force {
                defaults.save_to_clean(&path)?;
            } else {
                defaults.save_to(&path)?;
            }
            tracing::info!("Wrote default settings to {}", path.display());
            println!("Wrote default settings to {}", path.display());
        }
    }

    Ok(())
}

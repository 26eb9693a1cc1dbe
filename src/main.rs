// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Entry point for the notification-archive CLI.

use clap::Parser;

use notification_archive::cli::{Cli, Commands};
use notification_archive::config::Settings;
use notification_archive::error::Result;

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{run_config_command, run_replay};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load settings before tracing so the configured level can seed the filter
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_tracing(cli.verbose, &settings);

    match cli.command {
        Commands::Replay(args) => run_replay(args, settings, &cli.format),
        Commands::Config(args) => run_config_command(args, settings, cli.config, &cli.format),
    }
}

fn init_tracing(verbose: u8, settings: &Settings) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();

    if let Ok(parsed) = settings.log_directive().parse() {
        env_filter = env_filter.add_directive(parsed);
    }

    // `-v` enables archive diagnostics; `-vv` and up include per-entry tracing.
    let archive_level = match verbose {
        0 => None,
        1 => Some("notification_archive=debug"),
        _ => Some("notification_archive=trace"),
    };
    if let Some(directive) = archive_level {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

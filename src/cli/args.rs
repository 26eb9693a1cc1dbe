// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bounded notification history archive
#[derive(Parser, Debug)]
#[command(name = "notification-archive")]
#[command(version, about = "Bounded notification history archive")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a JSONL operation script against a fresh archive and print the history
    Replay(ReplayArgs),

    /// Settings management
    #[command(alias = "settings")]
    Config(ConfigArgs),
}

/// Output format options
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Script file, one JSON operation per line
    pub script: PathBuf,

    /// Override the configured archive capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Maximum number of entries to print (0 = everything archived)
    #[arg(short = 'n', long, default_value = "0")]
    pub limit: usize,

    /// Print the newest entries first
    #[arg(long)]
    pub newest_first: bool,

    /// Leave out entries archived because they were snoozed
    #[arg(long)]
    pub exclude_snoozed: bool,

    /// Only print entries posted for these users
    #[arg(short, long = "user", allow_hyphen_values = true)]
    pub users: Vec<i32>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,
    /// Print the settings file location
    Path,
    /// Write default settings to the settings file
    Init {
        /// Overwrite an existing file instead of merging into it
        #[arg(long)]
        force: bool,
    },
}

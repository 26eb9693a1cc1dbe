// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use notification_archive::cli::{Cli, Commands, ConfigCommands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_parse_replay_command() {
    let args = vec!["notification-archive", "replay", "script.jsonl"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Replay(_)));
}

#[test]
fn test_parse_replay_with_options() {
    let args = vec![
        "notification-archive",
        "replay",
        "script.jsonl",
        "--capacity",
        "10",
        "-n",
        "3",
        "--newest-first",
        "--exclude-snoozed",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Replay(replay_args) = cli.command {
        assert_eq!(replay_args.script, PathBuf::from("script.jsonl"));
        assert_eq!(replay_args.capacity, Some(10));
        assert_eq!(replay_args.limit, 3);
        assert!(replay_args.newest_first);
        assert!(replay_args.exclude_snoozed);
    } else {
        panic!("Expected Replay command");
    }
}

#[test]
fn test_parse_replay_requires_script() {
    let args = vec!["notification-archive", "replay"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_parse_config_show() {
    let args = vec!["notification-archive", "config", "show"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Config(config_args) = cli.command {
        assert!(matches!(config_args.command, ConfigCommands::Show));
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn test_parse_config_init_force() {
    let args = vec!["notification-archive", "config", "init", "--force"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Config(config_args) = cli.command {
        assert!(matches!(
            config_args.command,
            ConfigCommands::Init { force: true }
        ));
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn test_global_flags() {
    let args = vec![
        "notification-archive",
        "-vv",
        "--format",
        "json",
        "--config",
        "/tmp/settings.json",
        "config",
        "path",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.json")));
}

#[test]
fn test_invalid_format_rejected() {
    let args = vec!["notification-archive", "--format", "xml", "config", "path"];
    assert!(Cli::try_parse_from(args).is_err());
}

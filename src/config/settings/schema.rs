// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

pub use super::io::HOME_ENV;
pub use super::{ArchiveSettings, LoggingConfig, Settings};

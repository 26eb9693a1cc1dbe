// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{ArchiveError, Result};

use super::Settings;

impl Settings {
    /// Reject settings the archive cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.archive.capacity == 0 {
            return Err(ArchiveError::Config(
                "archive.capacity must be greater than zero".to_string(),
            ));
        }

        if let Some(user) = self
            .archive
            .enabled_users
            .iter()
            .find(|user| self.archive.disabled_users.contains(user))
        {
            return Err(ArchiveError::Config(format!(
                "user {} is listed as both enabled and disabled",
                user
            )));
        }

        Ok(())
    }

    /// Effective default tracing directive.
    pub fn log_directive(&self) -> &str {
        // Priority: config file > built-in default.
        self.logging.level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_invalid() {
        let mut settings = Settings::default();
        settings.archive.capacity = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_conflicting_users_invalid() {
        let mut settings = Settings::default();
        settings.archive.disabled_users = vec![-2];
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("user -2"));
    }

    #[test]
    fn test_log_directive_default() {
        let mut settings = Settings::default();
        assert_eq!(settings.log_directive(), "warn");
        settings.logging.level = Some("info".to_string());
        assert_eq!(settings.log_directive(), "info");
    }
}

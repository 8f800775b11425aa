// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The card itself
//! is never stored, only preferences about where and how it is exported.

use std::path::PathBuf;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "wrapefy";

pub(crate) const DEFAULT_FILE_NAME: &str = "wrapefy-card.png";
pub(crate) const DEFAULT_EXPORT_SCALE: u32 = 2;
pub(crate) const MAX_EXPORT_SCALE: u32 = 8;
pub(crate) const DEFAULT_SHARE_URL: &str = "https://instagram.com";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) file_name: String,
    pub(crate) export_scale: u32,
    pub(crate) font_path: Option<PathBuf>,
    pub(crate) bold_font_path: Option<PathBuf>,
    pub(crate) share_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            output_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            export_scale: DEFAULT_EXPORT_SCALE,
            font_path: None,
            bold_font_path: None,
            share_url: DEFAULT_SHARE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Directory exported cards are written to.
    ///
    /// Falls back to the user's download directory, then to the current
    /// directory when the platform has no notion of one.
    pub(crate) fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }

        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn export_path(&self) -> PathBuf {
        self.resolved_output_dir().join(&self.file_name)
    }

    /// The export scale, kept within `1..=MAX_EXPORT_SCALE`.
    ///
    /// A zero scale would produce an empty image and a large one an
    /// allocation the process cannot survive.
    pub(crate) fn scale(&self) -> u32 {
        self.export_scale.clamp(1, MAX_EXPORT_SCALE)
    }
}

pub(crate) fn load_config() -> AppConfig {
    match confy::load::<AppConfig>(CONFIG_NAME, None) {
        Ok(config) => {
            if !(1..=MAX_EXPORT_SCALE).contains(&config.export_scale) {
                tracing::warn!(
                    "Configured export_scale {} is outside 1..={MAX_EXPORT_SCALE}, using {}",
                    config.export_scale,
                    config.scale()
                );
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration, using defaults: {e}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.file_name, "wrapefy-card.png");
        assert_eq!(config.export_scale, 2);
        assert_eq!(config.share_url, "https://instagram.com");
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let config = AppConfig {
            output_dir: Some(PathBuf::from("/tmp/cards")),
            ..AppConfig::default()
        };

        assert_eq!(
            config.export_path(),
            PathBuf::from("/tmp/cards/wrapefy-card.png")
        );
    }

    #[test]
    fn test_export_path_uses_file_name() {
        let config = AppConfig::default();
        assert!(config.export_path().ends_with("wrapefy-card.png"));
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let config = AppConfig {
            export_scale: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.scale(), 1);
    }

    #[test]
    fn test_huge_scale_is_clamped() {
        let config = AppConfig {
            export_scale: 100_000,
            ..AppConfig::default()
        };
        assert_eq!(config.scale(), MAX_EXPORT_SCALE);

        let config = AppConfig {
            export_scale: u32::MAX,
            ..AppConfig::default()
        };
        assert_eq!(config.scale(), 8);
    }
}

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

//! Font discovery for the compositor.
//!
//! Fonts are read from the paths in the configuration when given, otherwise
//! from a list of locations where common sans-serif fonts are installed on
//! Linux, macOS and Windows.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::config::AppConfig;

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// The faces used on the card. The bold face falls back to the regular
/// one, and either may be missing altogether.
#[derive(Default)]
pub(crate) struct FontSet {
    regular: Option<FontVec>,
    bold: Option<FontVec>,
}

impl FontSet {
    pub(crate) fn load(config: &AppConfig) -> Self {
        let regular = load_first(config.font_path.as_deref(), REGULAR_CANDIDATES);
        let bold = load_first(config.bold_font_path.as_deref(), BOLD_CANDIDATES);

        if regular.is_none() && bold.is_none() {
            tracing::warn!("No usable font found, exported cards will have no text");
        }

        Self { regular, bold }
    }

    /// A set with no fonts, text drawing becomes a no-op.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn regular(&self) -> Option<&FontVec> {
        self.regular.as_ref().or(self.bold.as_ref())
    }

    pub(crate) fn bold(&self) -> Option<&FontVec> {
        self.bold.as_ref().or(self.regular.as_ref())
    }

    pub(crate) fn has_text(&self) -> bool {
        self.regular().is_some()
    }
}

fn load_first(configured: Option<&Path>, candidates: &[&str]) -> Option<FontVec> {
    if let Some(path) = configured {
        match read_font(path) {
            Some(font) => return Some(font),
            None => tracing::warn!("Configured font {} could not be loaded", path.display()),
        }
    }

    candidates
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.is_file())
        .find_map(|path| read_font(&path))
}

fn read_font(path: &Path) -> Option<FontVec> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("Failed to read font {}: {e}", path.display());
            return None;
        }
    };

    match FontVec::try_from_vec(data) {
        Ok(font) => {
            tracing::debug!("Loaded font {}", path.display());
            Some(font)
        }
        Err(e) => {
            tracing::debug!("Failed to parse font {}: {e}", path.display());
            None
        }
    }
}

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

//! PNG export of a card.
//!
//! # Sub-modules
//!
//! * [`compositor`]: Draws a card onto a pixel canvas.
//! * [`fonts`]: Locates and loads the faces used for card text.
//!
//! [`export_card`] ties them together: render, encode and write the file.

pub(crate) mod compositor;
pub(crate) mod fonts;

pub(crate) use compositor::Compositor;
pub(crate) use fonts::FontSet;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder};
use thiserror::Error;

use crate::{card::CardView, model::WrappedCard};

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("failed to encode card as PNG")]
    Encode(#[from] image::ImageError),

    #[error("failed to create export directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a card was written and how big it came out.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExportReport {
    pub(crate) path: PathBuf,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bytes: usize,
}

/// Renders `card` and writes it as a PNG to `path`.
///
/// Missing parent directories are created and an existing file at `path` is
/// replaced.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub(crate) fn export_card(
    compositor: &Compositor,
    card: &WrappedCard,
    path: &Path,
) -> Result<ExportReport, ExportError> {
    let view = CardView::from_card(card);
    let canvas = compositor.render(&view);
    let png = encode_png(&canvas)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, &png).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let report = ExportReport {
        path: path.to_path_buf(),
        width: canvas.width(),
        height: canvas.height(),
        bytes: png.len(),
    };

    tracing::info!(
        path = %report.path.display(),
        width = report.width,
        height = report.height,
        bytes = report.bytes,
        "Exported card"
    );

    Ok(report)
}

/// Encodes an image as PNG bytes.
pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);

    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(buffer)
}

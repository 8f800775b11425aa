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

//! Photo import.
//!
//! Turns a user-selected local file into a decoded [`Photo`] that both the
//! preview and the exporter can use. Decoding happens once, the resulting
//! pixels are shared between every snapshot of the card.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use directories::BaseDirs;
use image::{DynamicImage, ImageReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PhotoError {
    #[error("no photo path given")]
    EmptyPath,

    #[error("failed to open photo {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a supported image")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded image, ready to be placed on the card.
#[derive(Debug, Clone)]
pub(crate) struct Photo {
    path: PathBuf,
    image: Arc<DynamicImage>,
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && Arc::ptr_eq(&self.image, &other.image)
    }
}

impl Photo {
    /// Reads and decodes the image at `path`.
    ///
    /// The format is sniffed from the file contents, not the extension.
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, PhotoError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PhotoError::EmptyPath);
        }

        let open_err = |source| PhotoError::Open {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(open_err)?
            .with_guessed_format()
            .map_err(open_err)?
            .decode()
            .map_err(|source| PhotoError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded photo"
        );

        Ok(Self::from_image(path, image))
    }

    pub(crate) fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image: Arc::new(image),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// File name shown in the terminal preview in place of the pixels.
    pub(crate) fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Resolves a path typed by the user, expanding a leading `~` to the home
/// directory.
pub(crate) fn expand_home(raw: &str) -> PathBuf {
    let raw = raw.trim();

    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(raw),
    };

    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_png() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("selfie.png");
        RgbImage::from_pixel(8, 4, Rgb([200, 10, 10])).save(&path)?;

        let photo = Photo::load(&path)?;

        assert_eq!(photo.dimensions(), (8, 4));
        assert_eq!(photo.display_name(), "selfie.png");
        assert_eq!(photo.path(), path.as_path());
        Ok(())
    }

    #[test]
    fn test_load_ignores_misleading_extension() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let png_path = dir.path().join("real.png");
        RgbImage::from_pixel(3, 3, Rgb([0, 0, 0])).save(&png_path)?;

        let renamed = dir.path().join("actually-a-png.jpg");
        std::fs::rename(&png_path, &renamed)?;

        assert_eq!(Photo::load(&renamed)?.dimensions(), (3, 3));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = Photo::load("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, PhotoError::Open { .. }));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(" /tmp/me.png "), PathBuf::from("/tmp/me.png"));
        assert_eq!(expand_home("~user/me.png"), PathBuf::from("~user/me.png"));

        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_home("~/me.png"), dirs.home_dir().join("me.png"));
        }
    }

    #[test]
    fn test_load_empty_path() {
        assert!(matches!(Photo::load(""), Err(PhotoError::EmptyPath)));
    }

    #[test]
    fn test_load_not_an_image() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some text")?;

        let err = Photo::load(&path).unwrap_err();
        assert!(matches!(err, PhotoError::Decode { .. }));
        Ok(())
    }
}

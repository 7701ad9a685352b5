// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};

use super::{CodecError, ImageCodec};

/// Filesystem codec backed by the `image` crate (PNG, JPEG, BMP, GIF, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCodec;

impl ImageCodec for FsCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, CodecError> {
        let decode_err = |source| CodecError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let image = ImageReader::open(path)
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        SourceImage::check_dimensions(&image, path)?;
        Ok(image)
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), CodecError> {
        image.save(path).map_err(|source| CodecError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Represents the loaded source image.
pub struct SourceImage {
    /// The decoded, full-resolution image.
    image: DynamicImage,
    /// Where it came from, if loaded from disk.
    path: Option<PathBuf>,
}

impl SourceImage {
    /// Wrap a decoded image, rejecting zero-sized buffers.
    pub fn new(image: DynamicImage, path: Option<PathBuf>) -> Result<Self, CodecError> {
        Self::check_dimensions(&image, path.as_deref().unwrap_or_else(|| Path::new("<memory>")))?;
        Ok(Self { image, path })
    }

    /// Load a source image from disk.
    pub fn open(codec: &dyn ImageCodec, path: &Path) -> Result<Self, CodecError> {
        let image = codec.decode(path)?;
        Self::new(image, Some(path.to_path_buf()))
    }

    fn check_dimensions(image: &DynamicImage, path: &Path) -> Result<(), CodecError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CodecError::EmptyImage {
                path: path.to_path_buf(),
                width,
                height,
            });
        }
        Ok(())
    }

    /// Returns the native pixel dimensions (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The decoded full-resolution image.
    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Source path, `None` for in-memory images.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Image codec seam and output file naming.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

pub mod raster;

use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

use crate::constant::{DEFAULT_OUTPUT_EXT, DEFAULT_OUTPUT_STEM, LEFT_SUFFIX, RIGHT_SUFFIX};

pub use self::raster::{FsCodec, SourceImage};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{} decoded to an empty {width}x{height} image", path.display())]
    EmptyImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Reads source images and writes split outputs.
pub trait ImageCodec {
    /// Decode `path`. Zero-sized images are rejected here.
    fn decode(&self, path: &Path) -> Result<DynamicImage, CodecError>;

    /// Encode `image` to `path`; the format follows the extension.
    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), CodecError>;
}

/// Paths of a saved wallpaper pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub left: PathBuf,
    pub right: PathBuf,
}

/// `dir/name.ext` -> `dir/name_left.ext` and `dir/name_right.ext`.
#[must_use]
pub fn output_paths(base: &Path) -> OutputPaths {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_STEM);
    let ext = base
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(DEFAULT_OUTPUT_EXT);
    let dir = base.parent().unwrap_or_else(|| Path::new(""));

    OutputPaths {
        left: dir.join(format!("{stem}{LEFT_SUFFIX}.{ext}")),
        right: dir.join(format!("{stem}{RIGHT_SUFFIX}.{ext}")),
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/preview.rs
//
// Live preview thumbnails cut from the cached display-resolution image.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::domain::geometry::{Rect, floor_px};
use crate::domain::layout::MonitorLayout;
use crate::domain::mapping::DisplayMapping;

/// Bounding box each preview thumbnail is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

impl PreviewSize {
    /// `width` wide, tall enough for one monitor's aspect ratio.
    #[must_use]
    pub fn for_layout(layout: &MonitorLayout, width: u32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = floor_px(f64::from(width) / layout.single_monitor_ratio()) as u32;
        Self {
            width,
            height: height.max(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewPair {
    pub left: RgbaImage,
    pub right: RgbaImage,
}

/// Source image scaled to the mapped display size.
///
/// Rebuilt only when the mapper generation changes.
#[derive(Debug, Default)]
pub struct ScaledImageCache {
    generation: Option<u64>,
    image: Option<RgbaImage>,
}

impl ScaledImageCache {
    /// Drop the cached image; the next lookup rebuilds it.
    pub fn clear(&mut self) {
        self.generation = None;
        self.image = None;
    }

    /// Scaled image for `mapping`, rebuilt when `generation` changes.
    pub fn get_or_rebuild(
        &mut self,
        source: &DynamicImage,
        mapping: &DisplayMapping,
        generation: u64,
    ) -> &RgbaImage {
        if self.generation != Some(generation) || self.image.is_none() {
            log::debug!(
                "Rescaling source to {}x{} for display",
                mapping.scaled_width,
                mapping.scaled_height
            );
            self.image = Some(
                source
                    .resize_exact(
                        mapping.scaled_width,
                        mapping.scaled_height,
                        FilterType::Triangle,
                    )
                    .to_rgba8(),
            );
            self.generation = Some(generation);
        }
        self.image.get_or_insert_with(|| RgbaImage::new(1, 1))
    }
}

/// Cut two equal halves of `floor(crop.width / 2)` columns out of the
/// cached display image and fit each into `size`.
///
/// Unlike the saved output, the right half never absorbs an odd column, so
/// on odd widths the preview shows one column less than is saved. Returns
/// `None` if the halves would extend past the cached image.
#[must_use]
pub fn compute_preview_thumbnails(
    crop: &Rect,
    mapped: &Rect,
    cached: &RgbaImage,
    size: PreviewSize,
) -> Option<PreviewPair> {
    let rel_x = floor_px(crop.x - mapped.x);
    let rel_y = floor_px(crop.y - mapped.y);
    if rel_x < 0.0 || rel_y < 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (rel_x, rel_y, half, height) = (
        rel_x as u32,
        rel_y as u32,
        floor_px(crop.width / 2.0) as u32,
        floor_px(crop.height) as u32,
    );
    if half == 0 || height == 0 {
        return None;
    }
    if rel_x + 2 * half > cached.width() || rel_y + height > cached.height() {
        log::trace!("Preview halves exceed cached image, skipping");
        return None;
    }

    let left = imageops::crop_imm(cached, rel_x, rel_y, half, height).to_image();
    let right = imageops::crop_imm(cached, rel_x + half, rel_y, half, height).to_image();

    Some(PreviewPair {
        left: fit_into(&left, size),
        right: fit_into(&right, size),
    })
}

/// Scale `image` to fit inside `size`, preserving aspect ratio.
fn fit_into(image: &RgbaImage, size: PreviewSize) -> RgbaImage {
    let (w, h) = (f64::from(image.width()), f64::from(image.height()));
    let scale = (f64::from(size.width) / w).min(f64::from(size.height) / h);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (tw, th) = (
        ((w * scale).round() as u32).clamp(1, size.width),
        ((h * scale).round() as u32).clamp(1, size.height),
    );
    imageops::resize(image, tw, th, FilterType::Triangle)
}

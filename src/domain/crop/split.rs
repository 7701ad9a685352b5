// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/split.rs
//
// Final output split: display-space crop -> two pixel-exact image regions.

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;

use image::DynamicImage;

use crate::domain::geometry::{Rect, floor_px};
use crate::domain::mapping::DisplayMapping;

/// Crop region in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region spanning `[x1, x2) × [y1, y2)`.
    #[must_use]
    pub fn from_bounds(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Check if region has valid dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Cut this region out of `image`.
    #[must_use]
    pub fn crop(&self, image: &DynamicImage) -> DynamicImage {
        image.crop_imm(self.x, self.y, self.width, self.height)
    }
}

/// The two output regions. `right` starts exactly where `left` ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputCrops {
    pub left: PixelRegion,
    pub right: PixelRegion,
}

impl OutputCrops {
    /// Cut both regions out of the full-resolution source.
    #[must_use]
    pub fn split_image(&self, image: &DynamicImage) -> (DynamicImage, DynamicImage) {
        (self.left.crop(image), self.right.crop(image))
    }
}

/// Convert `crop` (display space) into two image-space regions split at the
/// midpoint. The right region absorbs the odd column.
///
/// Per-axis scale factors are derived from the mapped image rectangle, and
/// the edges are clamped to the image.
#[must_use]
pub fn compute_output_crops(crop: &Rect, mapping: &DisplayMapping) -> OutputCrops {
    let mapped = mapping.mapped_image_rect();
    let image_w = f64::from(mapping.image_width);
    let image_h = f64::from(mapping.image_height);
    let scale_x = mapping.scale_x();
    let scale_y = mapping.scale_y();

    let to_px = |v: f64, limit: f64| -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = floor_px(v).clamp(0.0, limit) as u32;
        px
    };

    let x1 = to_px((crop.left() - mapped.left()) * scale_x, image_w);
    let y1 = to_px((crop.top() - mapped.top()) * scale_y, image_h);
    let x2 = to_px((crop.right() - mapped.left()) * scale_x, image_w).max(x1);
    let y2 = to_px((crop.bottom() - mapped.top()) * scale_y, image_h).max(y1);

    let middle_x = x1 + (x2 - x1) / 2;

    OutputCrops {
        left: PixelRegion::from_bounds(x1, y1, middle_x, y2),
        right: PixelRegion::from_bounds(middle_x, y1, x2, y2),
    }
}

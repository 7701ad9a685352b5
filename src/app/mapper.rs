// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mapper.rs
//
// Cached display mapping, invalidated on viewport or image size change.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::domain::geometry::{Point, Rect};
use crate::domain::mapping::DisplayMapping;

/// Owns the current [`DisplayMapping`].
///
/// The mapping is recomputed only when the viewport or image size actually
/// changes. Each recompute bumps `generation`, which downstream caches
/// (the scaled display image) key on.
#[derive(Debug, Clone)]
pub struct DisplayMapper {
    viewport: (u32, u32),
    image: Option<(u32, u32)>,
    cached: Option<DisplayMapping>,
    generation: u64,
}

impl DisplayMapper {
    /// Mapper for a viewport with no image yet.
    #[must_use]
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport: (viewport_width, viewport_height),
            image: None,
            cached: None,
            generation: 0,
        }
    }

    /// Returns `true` if the size changed and the mapping was recomputed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if self.viewport == (width, height) {
            return false;
        }
        self.viewport = (width, height);
        self.invalidate();
        true
    }

    /// Returns `true` if the image size changed and the mapping was recomputed.
    pub fn set_image(&mut self, size: Option<(u32, u32)>) -> bool {
        if self.image == size {
            return false;
        }
        self.image = size;
        self.invalidate();
        true
    }

    /// Force a recompute, e.g. a new image with identical dimensions.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.cached = self
            .image
            .and_then(|image| DisplayMapping::compute(self.viewport, image));
        log::debug!(
            "Display mapping #{} for viewport {:?}: {:?}",
            self.generation,
            self.viewport,
            self.cached.map(|m| m.mapped_image_rect())
        );
    }

    /// Bumped on every recompute.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `None` while no image is loaded.
    #[must_use]
    pub fn mapping(&self) -> Option<&DisplayMapping> {
        self.cached.as_ref()
    }

    /// Empty rectangle while no image is loaded.
    #[must_use]
    pub fn mapped_image_rect(&self) -> Rect {
        self.cached
            .map(|m| m.mapped_image_rect())
            .unwrap_or_default()
    }

    /// Display point to image pixels; `None` without an image.
    #[must_use]
    pub fn to_image_space(&self, p: Point) -> Option<Point> {
        self.cached.map(|m| m.to_image_space(p))
    }

    /// Image pixel to display point; `None` without an image.
    #[must_use]
    pub fn to_display_space(&self, p: Point) -> Option<Point> {
        self.cached.map(|m| m.to_display_space(p))
    }
}

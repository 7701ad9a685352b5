// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapping.rs
//
// Display-space <-> image-space mapping for a centered, aspect-fit image.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use super::geometry::{Point, Rect};

/// Scaled, centered presentation of an image inside a viewport.
///
/// The scaled size is rounded to whole pixels and the offsets use integer
/// halving, so the mapped rectangle always lands on the pixel grid and is
/// fully contained in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMapping {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    /// Uniform fit scale: `min(vw / iw, vh / ih)`.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
}

impl DisplayMapping {
    /// Fit `image` into `viewport`. Returns `None` if either is zero-sized.
    #[must_use]
    pub fn compute(viewport: (u32, u32), image: (u32, u32)) -> Option<Self> {
        let (vw, vh) = viewport;
        let (iw, ih) = image;
        if vw == 0 || vh == 0 || iw == 0 || ih == 0 {
            return None;
        }

        let scale = (f64::from(vw) / f64::from(iw)).min(f64::from(vh) / f64::from(ih));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled_width = ((f64::from(iw) * scale).round() as u32).clamp(1, vw);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled_height = ((f64::from(ih) * scale).round() as u32).clamp(1, vh);

        Some(Self {
            viewport_width: vw,
            viewport_height: vh,
            image_width: iw,
            image_height: ih,
            scale,
            offset_x: f64::from((vw - scaled_width) / 2),
            offset_y: f64::from((vh - scaled_height) / 2),
            scaled_width,
            scaled_height,
        })
    }

    /// The display-space rectangle the image occupies.
    #[must_use]
    pub fn mapped_image_rect(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            f64::from(self.scaled_width),
            f64::from(self.scaled_height),
        )
    }

    /// Image pixels per display pixel, horizontally.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        f64::from(self.image_width) / f64::from(self.scaled_width)
    }

    /// Image pixels per display pixel, vertically.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        f64::from(self.image_height) / f64::from(self.scaled_height)
    }

    /// Display point to image pixel coordinates.
    #[must_use]
    pub fn to_image_space(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset_x) * self.scale_x(),
            (p.y - self.offset_y) * self.scale_y(),
        )
    }

    /// Image pixel coordinates to a display point.
    #[must_use]
    pub fn to_display_space(&self, p: Point) -> Point {
        Point::new(
            p.x / self.scale_x() + self.offset_x,
            p.y / self.scale_y() + self.offset_y,
        )
    }

    /// Map a display-space rectangle into image space (no clamping).
    #[must_use]
    pub fn rect_to_image_space(&self, r: &Rect) -> Rect {
        let tl = self.to_image_space(Point::new(r.left(), r.top()));
        let br = self.to_image_space(Point::new(r.right(), r.bottom()));
        Rect::from_edges(tl.x, tl.y, br.x, br.y)
    }

    /// Map an image-space rectangle into display space.
    #[must_use]
    pub fn rect_to_display_space(&self, r: &Rect) -> Rect {
        let tl = self.to_display_space(Point::new(r.left(), r.top()));
        let br = self.to_display_space(Point::new(r.right(), r.bottom()));
        Rect::from_edges(tl.x, tl.y, br.x, br.y)
    }
}

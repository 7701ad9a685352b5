// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/surface.rs
//
// Drawing surface trait and a software implementation over an RGBA buffer.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use image::{Pixel, Rgba, RgbaImage, imageops};

use crate::constant::{DASH_OFF, DASH_ON};
use crate::domain::geometry::{Point, Rect};

/// Primitive drawing operations the crop view needs from its host.
pub trait RenderSurface {
    fn draw_image(&mut self, image: &RgbaImage, at: Point);

    /// Fill `rect`, then stroke its inside edge with `stroke_width` pixels.
    fn draw_filled_rect(&mut self, rect: Rect, fill: Rgba<u8>, stroke: Rgba<u8>, stroke_width: f64);

    fn draw_dashed_line(&mut self, from: Point, to: Point);

    /// Solid square handle extending `size` pixels from `center`.
    fn draw_handle(&mut self, center: Point, size: f64);
}

/// Software surface used for headless snapshots.
pub struct RasterSurface {
    canvas: RgbaImage,
    line_color: Rgba<u8>,
    handle_color: Rgba<u8>,
}

impl RasterSurface {
    /// Transparent `width` x `height` canvas.
    #[must_use]
    pub fn new(width: u32, height: u32, line_color: Rgba<u8>, handle_color: Rgba<u8>) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
            line_color,
            handle_color,
        }
    }

    /// The canvas painted so far.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the surface and return the canvas.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.canvas.width() && y < self.canvas.height() {
            self.canvas.get_pixel_mut(x, y).blend(&color);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_area(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Rgba<u8>) {
        if color[3] == 0 {
            return;
        }
        let (x0, y0) = (left.round() as i64, top.round() as i64);
        let (x1, y1) = (right.round() as i64, bottom.round() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color);
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    #[allow(clippy::cast_possible_truncation)]
    fn draw_image(&mut self, image: &RgbaImage, at: Point) {
        imageops::overlay(&mut self.canvas, image, at.x.round() as i64, at.y.round() as i64);
    }

    fn draw_filled_rect(&mut self, rect: Rect, fill: Rgba<u8>, stroke: Rgba<u8>, stroke_width: f64) {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        self.fill_area(l, t, r, b, fill);

        if stroke_width <= 0.0 {
            return;
        }
        let sw = stroke_width.min(rect.width / 2.0).min(rect.height / 2.0);
        self.fill_area(l, t, r, t + sw, stroke);
        self.fill_area(l, b - sw, r, b, stroke);
        self.fill_area(l, t + sw, l + sw, b - sw, stroke);
        self.fill_area(r - sw, t + sw, r, b - sw, stroke);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_dashed_line(&mut self, from: Point, to: Point) {
        let length = (to.x - from.x).hypot(to.y - from.y);
        let steps = length.round() as u32;
        let period = DASH_ON + DASH_OFF;
        let color = self.line_color;

        for i in 0..=steps {
            if i % period >= DASH_ON {
                continue;
            }
            let t = if steps == 0 { 0.0 } else { f64::from(i) / f64::from(steps) };
            let p = from.lerp(to, t);
            self.blend(p.x.floor() as i64, p.y.floor() as i64, color);
        }
    }

    fn draw_handle(&mut self, center: Point, size: f64) {
        let color = self.handle_color;
        self.fill_area(
            center.x - size,
            center.y - size,
            center.x + size,
            center.y + size,
            color,
        );
    }
}

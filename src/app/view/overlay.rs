// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/overlay.rs
//
// Crop view painter: scaled image, selection rectangle, split guide, handles.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use image::{Rgba, RgbaImage};

use super::surface::RenderSurface;
use crate::domain::geometry::{Point, Rect};
use crate::domain::mapping::DisplayMapping;

const BACKGROUND_COLOR: Rgba<u8> = Rgba([0x2a, 0x2a, 0x2a, 0xff]);
const SELECTION_FILL: Rgba<u8> = Rgba([255, 255, 255, 30]);
const BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER_WIDTH: f64 = 2.0;
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Colours used by [`paint_crop_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub background: Rgba<u8>,
    pub selection_fill: Rgba<u8>,
    pub border: Rgba<u8>,
    pub border_width: f64,
    pub handle_size: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            selection_fill: SELECTION_FILL,
            border: BORDER_COLOR,
            border_width: BORDER_WIDTH,
            handle_size: 5.0,
        }
    }
}

/// Paint one frame of the crop view.
///
/// Order: background, scaled image at the mapping offset, translucent
/// selection with border, dashed split guide at `x + floor(width / 2)`,
/// then the four corner handles.
pub fn paint_crop_view<S: RenderSurface + ?Sized>(
    surface: &mut S,
    mapping: &DisplayMapping,
    scaled: &RgbaImage,
    crop: Option<Rect>,
    style: &OverlayStyle,
) {
    let viewport = Rect::new(
        0.0,
        0.0,
        f64::from(mapping.viewport_width),
        f64::from(mapping.viewport_height),
    );
    surface.draw_filled_rect(viewport, style.background, TRANSPARENT, 0.0);
    surface.draw_image(scaled, Point::new(mapping.offset_x, mapping.offset_y));

    let Some(crop) = crop.filter(|c| !c.is_empty()) else {
        return;
    };

    surface.draw_filled_rect(crop, style.selection_fill, style.border, style.border_width);

    let middle_x = crop.x + (crop.width / 2.0).floor();
    surface.draw_dashed_line(
        Point::new(middle_x, crop.top()),
        Point::new(middle_x, crop.bottom()),
    );

    for corner in [
        Point::new(crop.left(), crop.top()),
        Point::new(crop.right(), crop.top()),
        Point::new(crop.right(), crop.bottom()),
        Point::new(crop.left(), crop.bottom()),
    ] {
        surface.draw_handle(corner, style.handle_size);
    }
}

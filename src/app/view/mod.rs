// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Rendering: the drawing surface seam and the crop overlay painter.

mod overlay;
mod surface;

pub use overlay::{OverlayStyle, paint_crop_view};
pub use surface::{RasterSurface, RenderSurface};

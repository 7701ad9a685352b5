// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Aspect-locked crop rectangle: handles, geometry engine and output split.

mod engine;
mod handle;
mod split;

pub use engine::{CropGeometryEngine, DeltaOutcome, DragKind, EngineParams, NudgeDirection};
pub use handle::{Handle, hit_test_handle};
pub use split::{OutputCrops, PixelRegion, compute_output_crops};

// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Number of output wallpapers produced by one split.
pub const OUTPUT_COUNT: usize = 2;

/// Suffix appended to the file stem of the left output.
pub const LEFT_SUFFIX: &str = "_left";

/// Suffix appended to the file stem of the right output.
pub const RIGHT_SUFFIX: &str = "_right";

/// Default monitor width when no layout is supplied.
pub const DEFAULT_MONITOR_WIDTH: u32 = 1920;

/// Default monitor height when no layout is supplied.
pub const DEFAULT_MONITOR_HEIGHT: u32 = 1080;

/// Hit region extent as a multiple of the drawn handle size.
pub const HANDLE_HIT_FACTOR: f64 = 3.0;

/// Tolerance for aspect ratio comparisons (width / height).
pub const ASPECT_EPSILON: f64 = 1e-3;

/// Tolerance for containment and minimum size checks in display pixels.
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Bias added before flooring to integer pixels (guards 179.9999 -> 179).
pub const PIXEL_EPSILON: f64 = 1e-6;

/// Default file name used when the output path has no stem.
pub const DEFAULT_OUTPUT_STEM: &str = "wallpaper";

/// Default output extension when the output path has none.
pub const DEFAULT_OUTPUT_EXT: &str = "png";

/// Dash length of the split guide in pixels.
pub const DASH_ON: u32 = 4;

/// Gap between dashes of the split guide in pixels.
pub const DASH_OFF: u32 = 2;

/// Number of interpolated move events per scripted drag.
pub const DRAG_STEPS: u32 = 8;

/// Synthetic time between scripted move events in milliseconds.
pub const DRAG_STEP_MS: u64 = 4;

// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application.

use std::path::PathBuf;
use std::time::Duration;

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Optional default directory the split wallpapers are written to.
    pub default_output_dir: Option<PathBuf>,
    /// Minimum crop rectangle width in display pixels.
    pub min_width: f64,
    /// Drawn handle half-size in display pixels.
    pub handle_size: f64,
    /// Margin around the crop rectangle that still starts a move.
    pub body_margin: f64,
    /// Fraction of the constrained image dimension used by a fresh crop.
    pub initial_fill: f64,
    /// Minimum time between redraws while dragging (~60 Hz).
    pub frame_interval: Duration,
    /// Refresh previews once every N frames while dragging.
    pub preview_every: u8,
    /// Preview thumbnail box width in pixels.
    pub preview_width: u32,
    /// Arrow key nudge distance in pixels.
    pub nudge_step: f64,
    /// Arrow key nudge distance with Shift held.
    pub nudge_step_fast: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_dir: dirs::picture_dir().or_else(dirs::home_dir),
            min_width: 200.0,
            handle_size: 5.0,
            body_margin: 5.0,
            initial_fill: 0.8,
            frame_interval: Duration::from_millis(16),
            preview_every: 3,
            preview_width: 320,
            nudge_step: 1.0,
            nudge_step_fast: 10.0,
        }
    }
}

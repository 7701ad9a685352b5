// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/layout.rs
//
// Monitor layout: combined geometry and the locked crop aspect ratio.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constant::{DEFAULT_MONITOR_HEIGHT, DEFAULT_MONITOR_WIDTH, OUTPUT_COUNT};

/// Geometry of a single output display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    pub width: u32,
    pub height: u32,
}

impl Monitor {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected WIDTHxHEIGHT with positive integers, got {0:?}")]
pub struct ParseMonitorError(pub String);

/// Parse `"1920x1080"` into `(1920, 1080)`. Both parts must be positive.
pub fn parse_dimensions(s: &str) -> Result<(u32, u32), ParseMonitorError> {
    let err = || ParseMonitorError(s.to_string());
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(err)?;
    let width: u32 = w.trim().parse().map_err(|_| err())?;
    let height: u32 = h.trim().parse().map_err(|_| err())?;
    if width == 0 || height == 0 {
        return Err(err());
    }
    Ok((width, height))
}

impl FromStr for Monitor {
    type Err = ParseMonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimensions(s).map(|(width, height)| Self { width, height })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("monitor layout needs at least one monitor")]
    NoMonitors,
    #[error("monitor {index} has a zero dimension ({monitor})")]
    ZeroSized { index: usize, monitor: Monitor },
}

/// Source of connected monitor geometry.
pub trait MonitorProvider {
    /// Monitors in left-to-right order.
    fn monitors(&self) -> Vec<Monitor>;
}

/// Fixed monitor list (command line or defaults).
#[derive(Debug, Clone)]
pub struct StaticMonitors(pub Vec<Monitor>);

impl Default for StaticMonitors {
    fn default() -> Self {
        Self(vec![
            Monitor::new(DEFAULT_MONITOR_WIDTH, DEFAULT_MONITOR_HEIGHT);
            OUTPUT_COUNT
        ])
    }
}

impl MonitorProvider for StaticMonitors {
    fn monitors(&self) -> Vec<Monitor> {
        self.0.clone()
    }
}

/// Ordered monitor geometries and the values derived from them.
///
/// Totals are computed once in [`MonitorLayout::new`] and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorLayout {
    monitors: Vec<Monitor>,
    total_width: u32,
    total_height: u32,
}

impl MonitorLayout {
    /// Validate `monitors` and compute the combined geometry.
    pub fn new(monitors: Vec<Monitor>) -> Result<Self, LayoutError> {
        if monitors.is_empty() {
            return Err(LayoutError::NoMonitors);
        }
        if let Some((index, monitor)) = monitors
            .iter()
            .enumerate()
            .find(|(_, m)| m.width == 0 || m.height == 0)
        {
            return Err(LayoutError::ZeroSized {
                index,
                monitor: *monitor,
            });
        }

        let total_width = monitors.iter().map(|m| m.width).sum();
        let total_height = monitors.iter().map(|m| m.height).max().unwrap_or(1);

        if monitors.len() != OUTPUT_COUNT {
            log::warn!(
                "Layout has {} monitors; output is still split into {OUTPUT_COUNT} halves",
                monitors.len()
            );
        }

        Ok(Self {
            monitors,
            total_width,
            total_height,
        })
    }

    /// Layout from whatever monitors `provider` reports.
    pub fn from_provider(provider: &dyn MonitorProvider) -> Result<Self, LayoutError> {
        Self::new(provider.monitors())
    }

    /// Monitors left to right.
    #[must_use]
    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Sum of all monitor widths.
    #[must_use]
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Height of the tallest monitor.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    /// Combined width over tallest height; the crop rectangle is locked to it.
    #[must_use]
    pub fn target_aspect_ratio(&self) -> f64 {
        f64::from(self.total_width) / f64::from(self.total_height)
    }

    /// Aspect ratio of one output half.
    #[must_use]
    pub fn single_monitor_ratio(&self) -> f64 {
        f64::from(self.total_width) / (OUTPUT_COUNT as f64 * f64::from(self.total_height))
    }

    /// Each monitor's share of the total width, left to right.
    ///
    /// Informational: outputs are always split at the midpoint.
    #[must_use]
    pub fn split_ratios(&self) -> Vec<f64> {
        let total = f64::from(self.total_width);
        self.monitors
            .iter()
            .map(|m| f64::from(m.width) / total)
            .collect()
    }
}

impl Default for MonitorLayout {
    fn default() -> Self {
        let StaticMonitors(monitors) = StaticMonitors::default();
        let total_width = monitors.iter().map(|m| m.width).sum();
        Self {
            monitors,
            total_width,
            total_height: DEFAULT_MONITOR_HEIGHT,
        }
    }
}

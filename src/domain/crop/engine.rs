// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/engine.rs
//
// Crop rectangle state with aspect-locked resize, clamped move and nudge.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use super::handle::{Handle, hit_test_handle};
use crate::config::AppConfig;
use crate::constant::{GEOMETRY_EPSILON, HANDLE_HIT_FACTOR};
use crate::domain::geometry::{Point, Rect, Vector, floor_px};
use crate::domain::layout::MonitorLayout;

/// Tunables for the engine, usually taken from [`AppConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    pub min_width: f64,
    pub handle_size: f64,
    pub body_margin: f64,
    pub initial_fill: f64,
}

impl From<&AppConfig> for EngineParams {
    fn from(config: &AppConfig) -> Self {
        Self {
            min_width: config.min_width,
            handle_size: config.handle_size,
            body_margin: config.body_margin,
            initial_fill: config.initial_fill,
        }
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

/// What a drag step does to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize(Handle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    fn delta(self, step: f64) -> Vector {
        match self {
            Self::Left => Vector::new(-step, 0.0),
            Self::Right => Vector::new(step, 0.0),
            Self::Up => Vector::new(0.0, -step),
            Self::Down => Vector::new(0.0, step),
        }
    }
}

/// Result of [`CropGeometryEngine::apply_delta`].
///
/// `Rejected` is not an error: the candidate broke an invariant and the
/// previous rectangle was kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaOutcome {
    Accepted(Rect),
    Rejected(Rect),
}

impl DeltaOutcome {
    /// The rectangle carried by either variant.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Accepted(r) | Self::Rejected(r) => *r,
        }
    }

    /// Whether the candidate was committed.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the crop rectangle in display space.
///
/// Every committed rectangle keeps `width / height == ratio`, stays inside
/// the mapped image rectangle and is at least `min_width` wide. The initial
/// rectangle is truncated to whole pixels and may carry sub-pixel drift from
/// the exact ratio; the first resize re-locks it.
#[derive(Debug, Clone)]
pub struct CropGeometryEngine {
    rect: Rect,
    ratio: f64,
    params: EngineParams,
    active: Option<DragKind>,
}

impl CropGeometryEngine {
    /// Engine locked to the layout ratio, initialized inside `image_rect`.
    #[must_use]
    pub fn new(layout: &MonitorLayout, params: EngineParams, image_rect: Rect) -> Self {
        let ratio = layout.target_aspect_ratio();
        Self {
            rect: initial_rect(&image_rect, ratio, params.initial_fill),
            ratio,
            params,
            active: None,
        }
    }

    /// Replace the rectangle with a fresh one centred in `image_rect`.
    pub fn initialize(&mut self, image_rect: Rect) -> Rect {
        self.rect = initial_rect(&image_rect, self.ratio, self.params.initial_fill);
        self.active = None;
        log::debug!("Crop rectangle initialized to {:?}", self.rect);
        self.rect
    }

    /// Current crop rectangle in display space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Locked width / height ratio.
    #[must_use]
    pub fn target_aspect_ratio(&self) -> f64 {
        self.ratio
    }

    /// Minimum width in display pixels.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.params.min_width
    }

    /// Minimum height implied by the minimum width and the ratio.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.params.min_width / self.ratio
    }

    /// Drag currently recorded by `begin_resize` / `begin_move`.
    #[must_use]
    pub fn active(&self) -> Option<DragKind> {
        self.active
    }

    /// Handle under `point`, using a hit extent of three handle sizes.
    #[must_use]
    pub fn hit_test_handle(&self, point: Point) -> Option<Handle> {
        hit_test_handle(
            &self.rect,
            point,
            self.params.handle_size * HANDLE_HIT_FACTOR,
        )
    }

    /// Whether `point` is inside the rectangle grown by the body margin.
    #[must_use]
    pub fn hit_test_body(&self, point: Point) -> bool {
        self.rect.expanded(self.params.body_margin).contains(point)
    }

    /// Record a resize drag on `handle`.
    pub fn begin_resize(&mut self, handle: Handle) {
        self.active = Some(DragKind::Resize(handle));
    }

    /// Record a move drag.
    pub fn begin_move(&mut self) {
        self.active = Some(DragKind::Move);
    }

    /// Clear the recorded drag.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// Apply one pointer step.
    ///
    /// Resizes are all-or-nothing: an invalid candidate leaves the rectangle
    /// untouched. Moves always succeed, saturating at `bounds`.
    pub fn apply_delta(&mut self, kind: DragKind, delta: Vector, bounds: Rect) -> DeltaOutcome {
        match kind {
            DragKind::Move => {
                self.rect = self.moved(delta, &bounds);
                DeltaOutcome::Accepted(self.rect)
            }
            DragKind::Resize(handle) => {
                let candidate = self.resize_candidate(handle, delta, &bounds);
                if self.is_valid(&candidate, &bounds) {
                    self.rect = candidate;
                    DeltaOutcome::Accepted(candidate)
                } else {
                    log::trace!("Rejected {handle:?} candidate {candidate:?}");
                    DeltaOutcome::Rejected(self.rect)
                }
            }
        }
    }

    /// Arrow-key nudge; clamps at the matching edge of `bounds`.
    pub fn nudge(&mut self, direction: NudgeDirection, step: f64, bounds: Rect) -> Rect {
        self.rect = self.moved(direction.delta(step), &bounds);
        self.rect
    }

    /// Adopt a rectangle carried over from a previous mapping.
    ///
    /// The height is re-derived from the width, the rectangle is shrunk to
    /// fit `bounds` if needed and then clamped inside. If the minimum size
    /// can no longer be honoured the rectangle is re-initialized.
    pub fn rebase(&mut self, carried: Rect, bounds: Rect) -> Rect {
        let fit_width = bounds.width.min(bounds.height * self.ratio);
        let width = carried.width.min(fit_width);
        if width + GEOMETRY_EPSILON < self.params.min_width || carried.is_empty() {
            return self.initialize(bounds);
        }

        let height = width / self.ratio;
        let center = carried.center();
        let centred = Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height);
        self.rect = centred;
        self.rect = self.moved(Vector::default(), &bounds);
        self.rect
    }

    fn resize_candidate(&self, handle: Handle, delta: Vector, bounds: &Rect) -> Rect {
        let r = self.rect;
        let (left, top, right, bottom) = (r.left(), r.top(), r.right(), r.bottom());
        let min_w = self.params.min_width;
        let min_h = self.min_height();

        if handle.moves_left() || handle.moves_right() {
            let (new_left, new_right) = if handle.moves_left() {
                let new_left = (left + delta.dx).min(right - min_w).max(bounds.left());
                (new_left, right)
            } else {
                let new_right = (right + delta.dx).max(left + min_w).min(bounds.right());
                (left, new_right)
            };
            let width = new_right - new_left;
            let height = width / self.ratio;
            let new_top = if handle.moves_top() {
                bottom - height
            } else if handle.moves_bottom() {
                top
            } else {
                r.center().y - height / 2.0
            };
            Rect::new(new_left, new_top, width, height)
        } else {
            let (new_top, new_bottom) = if handle.moves_top() {
                let new_top = (top + delta.dy).min(bottom - min_h).max(bounds.top());
                (new_top, bottom)
            } else {
                let new_bottom = (bottom + delta.dy).max(top + min_h).min(bounds.bottom());
                (top, new_bottom)
            };
            let height = new_bottom - new_top;
            let width = height * self.ratio;
            Rect::new(r.center().x - width / 2.0, new_top, width, height)
        }
    }

    fn is_valid(&self, candidate: &Rect, bounds: &Rect) -> bool {
        candidate.width + GEOMETRY_EPSILON >= self.params.min_width
            && candidate.height + GEOMETRY_EPSILON >= self.min_height()
            && bounds.contains_rect(candidate)
    }

    fn moved(&self, delta: Vector, bounds: &Rect) -> Rect {
        let r = self.rect;
        let mut x = r.x + delta.dx;
        let mut y = r.y + delta.dy;

        if x < bounds.left() {
            x = bounds.left();
        } else if x + r.width > bounds.right() {
            x = bounds.right() - r.width;
        }
        if y < bounds.top() {
            y = bounds.top();
        } else if y + r.height > bounds.bottom() {
            y = bounds.bottom() - r.height;
        }

        Rect::new(x, y, r.width, r.height)
    }
}

/// Centred starting rectangle covering `initial_fill` of the constrained
/// dimension of `image_rect`, truncated to whole pixels.
#[must_use]
pub fn initial_rect(image_rect: &Rect, ratio: f64, fill: f64) -> Rect {
    let Some(image_ratio) = image_rect.aspect_ratio() else {
        return Rect::default();
    };

    let (width, height) = if image_ratio > ratio {
        let height = floor_px(image_rect.height * fill);
        (floor_px(height * ratio), height)
    } else {
        let width = floor_px(image_rect.width * fill);
        (width, floor_px(width / ratio))
    };

    Rect::new(
        image_rect.x + ((image_rect.width - width) / 2.0).floor(),
        image_rect.y + ((image_rect.height - height) / 2.0).floor(),
        width,
        height,
    )
}

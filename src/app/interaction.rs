// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/interaction.rs
//
// Pointer/keyboard state machine driving the crop engine, plus redraw throttling.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use std::time::{Duration, Instant};

use crate::app::message::{Key, KeyEvent, PointerEvent, PointerKind};
use crate::config::AppConfig;
use crate::domain::crop::{CropGeometryEngine, DeltaOutcome, DragKind, Handle, NudgeDirection};
use crate::domain::geometry::{Point, Rect};

/// Active gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Moving,
    Resizing(Handle),
}

impl InteractionState {
    fn drag_kind(self) -> Option<DragKind> {
        match self {
            Self::Idle => None,
            Self::Moving => Some(DragKind::Move),
            Self::Resizing(handle) => Some(DragKind::Resize(handle)),
        }
    }
}

/// A redraw released by the throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Re-rasterize the preview thumbnails in this frame.
    pub refresh_preview: bool,
}

/// Coalesces redraw requests.
///
/// While dragging, at most one frame is released per `interval` and only
/// every `preview_every`-th frame refreshes the previews. Outside a drag,
/// every request yields a frame with previews.
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    interval: Duration,
    preview_every: u8,
    preview_counter: u8,
    pending: bool,
    last_frame: Option<Instant>,
}

impl RedrawThrottle {
    /// Throttle releasing drag frames at most once per `interval`.
    #[must_use]
    pub fn new(interval: Duration, preview_every: u8) -> Self {
        Self {
            interval,
            preview_every: preview_every.max(1),
            preview_counter: 0,
            pending: false,
            last_frame: None,
        }
    }

    /// Mark the view dirty.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Release the pending frame if it is due at `now`.
    pub fn poll(&mut self, now: Instant, dragging: bool) -> Option<Frame> {
        if !self.pending {
            return None;
        }
        let due = !dragging
            || self
                .last_frame
                .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if !due {
            return None;
        }

        self.pending = false;
        self.last_frame = Some(now);
        let refresh_preview = !dragging || self.preview_counter == 0;
        self.preview_counter = (self.preview_counter + 1) % self.preview_every;
        Some(Frame { refresh_preview })
    }
}

/// Translates pointer and key events into crop engine calls.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    anchor: Option<Point>,
    throttle: RedrawThrottle,
    nudge_step: f64,
    nudge_step_fast: f64,
}

impl InteractionController {
    /// Idle controller using the nudge steps and frame cadence from `config`.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            anchor: None,
            throttle: RedrawThrottle::new(config.frame_interval, config.preview_every),
            nudge_step: config.nudge_step,
            nudge_step_fast: config.nudge_step_fast,
        }
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Last pointer position while a gesture is active.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Whether a move or resize is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state != InteractionState::Idle
    }

    /// Drop any gesture in progress (new image loaded).
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.anchor = None;
        self.throttle.request();
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer(
        &mut self,
        engine: &mut CropGeometryEngine,
        event: PointerEvent,
        bounds: Rect,
    ) -> bool {
        match event.kind {
            PointerKind::Down => self.pointer_down(engine, event.position),
            PointerKind::Move => self.pointer_move(engine, event.position, bounds).is_some(),
            PointerKind::Up => self.pointer_up(engine),
        }
    }

    /// Start a resize (handle hit) or move (body hit). Misses are no-ops.
    pub fn pointer_down(&mut self, engine: &mut CropGeometryEngine, position: Point) -> bool {
        if self.is_dragging() {
            return false;
        }

        if let Some(handle) = engine.hit_test_handle(position) {
            engine.begin_resize(handle);
            self.state = InteractionState::Resizing(handle);
        } else if engine.hit_test_body(position) {
            engine.begin_move();
            self.state = InteractionState::Moving;
        } else {
            return false;
        }

        log::debug!("Pointer down at {position:?}: {:?}", self.state);
        self.anchor = Some(position);
        true
    }

    /// Apply the delta since the last event. The anchor always advances,
    /// even when the engine rejects the candidate.
    pub fn pointer_move(
        &mut self,
        engine: &mut CropGeometryEngine,
        position: Point,
        bounds: Rect,
    ) -> Option<DeltaOutcome> {
        let kind = self.state.drag_kind()?;
        let anchor = self.anchor?;

        let outcome = engine.apply_delta(kind, position - anchor, bounds);
        self.anchor = Some(position);
        self.throttle.request();
        Some(outcome)
    }

    /// Finish the active gesture and request a frame with previews.
    pub fn pointer_up(&mut self, engine: &mut CropGeometryEngine) -> bool {
        if !self.is_dragging() {
            return false;
        }
        log::debug!("Drag finished: {:?}", engine.rect());
        self.state = InteractionState::Idle;
        self.anchor = None;
        engine.end_drag();
        self.throttle.request();
        true
    }

    /// Arrow keys nudge the rectangle; Shift uses the fast step.
    pub fn key_press(
        &mut self,
        engine: &mut CropGeometryEngine,
        event: KeyEvent,
        bounds: Rect,
    ) -> bool {
        let direction = match event.key {
            Key::ArrowLeft => NudgeDirection::Left,
            Key::ArrowRight => NudgeDirection::Right,
            Key::ArrowUp => NudgeDirection::Up,
            Key::ArrowDown => NudgeDirection::Down,
            Key::Other => return false,
        };
        let step = if event.modifiers.shift {
            self.nudge_step_fast
        } else {
            self.nudge_step
        };

        engine.nudge(direction, step, bounds);
        self.throttle.request();
        true
    }

    /// Request a frame outside of pointer input (viewport change, load).
    pub fn request_redraw(&mut self) {
        self.throttle.request();
    }

    /// Next frame from the throttle, if one is due at `now`.
    pub fn poll_frame(&mut self, now: Instant) -> Option<Frame> {
        let dragging = self.is_dragging();
        self.throttle.poll(now, dragging)
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Input messages delivered by the host: pointer, keyboard and viewport events.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::str::FromStr;

use thiserror::Error;

use crate::domain::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event in display-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
        }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
        }
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Modifier keys held during an event. Only Shift changes behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers { shift: true },
        }
    }
}

/// Everything the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    ViewportResized { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInputError {
    #[error("expected X1,Y1:X2,Y2, got {0:?}")]
    Drag(String),
    #[error("expected [shift+]left|right|up|down, got {0:?}")]
    Nudge(String),
}

/// Scripted drag from one display point to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub from: Point,
    pub to: Point,
}

impl DragGesture {
    /// Pointer-down at `from`, `steps` interpolated moves ending at `to`, pointer-up.
    #[must_use]
    pub fn events(&self, steps: u32) -> Vec<PointerEvent> {
        let steps = steps.max(1);
        let mut events = Vec::with_capacity(steps as usize + 2);
        events.push(PointerEvent::down(self.from.x, self.from.y));
        for i in 1..=steps {
            let p = self.from.lerp(self.to, f64::from(i) / f64::from(steps));
            events.push(PointerEvent::moved(p.x, p.y));
        }
        events.push(PointerEvent::up(self.to.x, self.to.y));
        events
    }
}

fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

impl FromStr for DragGesture {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseInputError::Drag(s.to_string());
        let (from, to) = s.split_once(':').ok_or_else(err)?;
        Ok(Self {
            from: parse_point(from).ok_or_else(err)?,
            to: parse_point(to).ok_or_else(err)?,
        })
    }
}

impl FromStr for KeyEvent {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (shift, name) = match lower.strip_prefix("shift+") {
            Some(rest) => (true, rest),
            None => (false, lower.as_str()),
        };
        let key = match name {
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            "up" => Key::ArrowUp,
            "down" => Key::ArrowDown,
            _ => return Err(ParseInputError::Nudge(s.to_string())),
        };
        Ok(if shift {
            Self::with_shift(key)
        } else {
            Self::new(key)
        })
    }
}

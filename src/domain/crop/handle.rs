// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/handle.rs
//
// The eight resize handles and their hit regions.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use crate::domain::geometry::{Point, Rect};

/// A resize handle on the crop rectangle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    /// Hit-test priority. The first handle whose region contains the point wins.
    pub const PRIORITY: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
    ];

    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }

    /// Hit region for this handle on `rect`, `hit` pixels out from the anchor.
    ///
    /// Corners get a `2·hit` square centred on the corner. Edges span the
    /// edge inset by `hit` from both corners so they never overlap a corner.
    #[must_use]
    pub fn hit_region(self, rect: &Rect, hit: f64) -> Rect {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let span_w = (rect.width - 2.0 * hit).max(0.0);
        let span_h = (rect.height - 2.0 * hit).max(0.0);
        let side = 2.0 * hit;

        match self {
            Self::TopLeft => Rect::new(l - hit, t - hit, side, side),
            Self::Top => Rect::new(l + hit, t - hit, span_w, side),
            Self::TopRight => Rect::new(r - hit, t - hit, side, side),
            Self::Right => Rect::new(r - hit, t + hit, side, span_h),
            Self::BottomRight => Rect::new(r - hit, b - hit, side, side),
            Self::Bottom => Rect::new(l + hit, b - hit, span_w, side),
            Self::BottomLeft => Rect::new(l - hit, b - hit, side, side),
            Self::Left => Rect::new(l - hit, t + hit, side, span_h),
        }
    }
}

/// First handle in [`Handle::PRIORITY`] whose region contains `point`.
#[must_use]
pub fn hit_test_handle(rect: &Rect, point: Point, hit: f64) -> Option<Handle> {
    Handle::PRIORITY
        .into_iter()
        .find(|h| h.hit_region(rect, hit).contains(point))
}

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overscroll clamping for the artboard pan offset.
//!
//! The policy is a pure function of the proposed offset, the viewport extent
//! and the artboard extent at the current zoom. It is recomputed from scratch
//! on every call, so it never accumulates error across resizes or zoom
//! changes.

use kurbo::{Size, Vec2};

/// Slack, in viewport pixels, that the artboard may be pushed past its
/// resting position on either axis.
pub const DEFAULT_OVERSCROLL: f64 = 160.0;

/// Bounds the pan offset so that the artboard always stays reachable.
///
/// Per axis, with viewport extent `V` and scaled content extent `C`:
/// - `C <= V`: the offset may move within `overscroll` of the centered
///   position `(V - C) / 2`.
/// - `C > V`: the offset may range over `[V - C - overscroll, overscroll]`.
///
/// An inverted range collapses to its midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampPolicy {
    overscroll: f64,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_OVERSCROLL)
    }
}

impl ClampPolicy {
    /// Creates a policy with the given overscroll slack in pixels.
    ///
    /// Non-finite slack is treated as zero.
    #[must_use]
    pub fn new(overscroll: f64) -> Self {
        let overscroll = if overscroll.is_finite() {
            overscroll
        } else {
            0.0
        };
        Self { overscroll }
    }

    /// Returns the overscroll slack in pixels.
    #[must_use]
    pub fn overscroll(&self) -> f64 {
        self.overscroll
    }

    /// Returns the `(min, max)` range of valid offsets for one axis.
    ///
    /// Negative extents are treated as zero. The returned range is never
    /// inverted.
    #[must_use]
    pub fn axis_range(&self, view_extent: f64, content_extent: f64) -> (f64, f64) {
        let view = non_negative(view_extent);
        let content = non_negative(content_extent);
        let (min, max) = if content <= view {
            let rest = (view - content) / 2.0;
            (rest - self.overscroll, rest + self.overscroll)
        } else {
            (view - content - self.overscroll, self.overscroll)
        };
        if min > max {
            let mid = (min + max) / 2.0;
            (mid, mid)
        } else {
            (min, max)
        }
    }

    /// Clamps a single axis offset.
    #[must_use]
    pub fn clamp_axis(&self, value: f64, view_extent: f64, content_extent: f64) -> f64 {
        let (min, max) = self.axis_range(view_extent, content_extent);
        max.min(min.max(value))
    }

    /// Clamps a proposed offset for a viewport of `view` pixels showing
    /// content that currently measures `content` pixels on screen.
    #[must_use]
    pub fn clamp(&self, proposed: Vec2, view: Size, content: Size) -> Vec2 {
        Vec2::new(
            self.clamp_axis(proposed.x, view.width, content.width),
            self.clamp_axis(proposed.y, view.height, content.height),
        )
    }
}

/// NaN and negative values both collapse to zero.
fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

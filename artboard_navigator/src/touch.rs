// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-versus-manipulate decision for touch and pen input.
//!
//! A single-finger drag is ambiguous: it may mean "move the selected object"
//! or "pan the canvas". The decision is made once, when the gesture
//! recognizer reports a pan start, from the facts in [`TouchContext`].

/// Facts about the pointer(s) at the start of a touch pan.
///
/// Passed in by the host so the decision never depends on ambient device
/// detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchContext {
    /// Number of active touch points.
    pub touch_count: u32,
    /// Whether the active pointer is a pen/stylus.
    pub is_stylus: bool,
    /// Whether the scene currently has a selected object.
    pub has_selection: bool,
}

impl TouchContext {
    /// Context for `touch_count` fingers.
    #[must_use]
    pub fn fingers(touch_count: u32, has_selection: bool) -> Self {
        Self {
            touch_count,
            is_stylus: false,
            has_selection,
        }
    }

    /// Context for a stylus.
    #[must_use]
    pub fn stylus(has_selection: bool) -> Self {
        Self {
            touch_count: 1,
            is_stylus: true,
            has_selection,
        }
    }
}

/// Whether a pan gesture starting in `ctx` should move the viewport.
///
/// It does when finger-pan priority is on and the pointer is not a stylus,
/// when two or more touch points are down, or when nothing is selected.
#[must_use]
pub fn should_pan_viewport(finger_pan_priority: bool, ctx: &TouchContext) -> bool {
    (finger_pan_priority && !ctx.is_stylus) || ctx.touch_count >= 2 || !ctx.has_selection
}

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input as delivered by the host, reduced to what navigation reads.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Whether the wheel should zoom rather than pan (Ctrl, or Cmd on macOS).
    #[must_use]
    pub fn zooms(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// Mouse button involved in a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
    /// Any other button, by platform index.
    Other(u16),
}

/// Keyboard key, as far as navigation cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar.
    Space,
    /// A key producing a printable character.
    Character(char),
    /// Anything else.
    Other,
}

/// One wheel (or trackpad scroll) event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in pixels, positive `y` meaning "scroll down".
    pub delta: Vec2,
    /// Pointer position in client coordinates, before the chrome offset is
    /// removed.
    pub position: Point,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl WheelInput {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(delta: Vec2, position: Point, modifiers: Modifiers) -> Self {
        Self {
            delta,
            position,
            modifiers,
        }
    }
}

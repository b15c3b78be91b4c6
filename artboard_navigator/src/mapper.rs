// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse, wheel and keyboard input mapped to navigation actions.
//!
//! [`InputMapper`] tracks the little state desktop navigation needs (whether
//! space is held, and the active drag-pan session) and turns each raw event
//! into at most one [`NavAction`]. It never touches the viewport; the
//! [`Navigator`](crate::Navigator) applies the actions.
//!
//! | Input                                  | Action                          |
//! |----------------------------------------|---------------------------------|
//! | wheel + Ctrl/Cmd                       | [`NavAction::ZoomAbout`] cursor |
//! | wheel + Shift                          | horizontal [`NavAction::PanBy`] |
//! | wheel                                  | [`NavAction::PanBy`]            |
//! | middle press, or left press with space | [`NavAction::BeginDragPan`]     |
//! | move while dragging                    | [`NavAction::PanBy`]            |
//! | release, or space up while dragging    | [`NavAction::EndDragPan`]       |
//! | Ctrl/Cmd + `=` / `+` / `-` / `0` / `1` | zoom in / out, fit, 100 %       |

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use tracing::debug;

use artboard_event_state::session::GestureSession;

use crate::input::{Key, Modifiers, MouseButton, WheelInput};

/// Per-pixel base of the exponential wheel zoom: `factor = base^deltaY`.
///
/// Equal wheel ticks give equal relative zoom changes at any zoom level.
pub const WHEEL_ZOOM_BASE: f64 = 0.999;

/// What an input event asks the viewport to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Pan by a delta in viewport pixels.
    PanBy(Vec2),
    /// Multiply the zoom by `factor`, keeping `anchor` (viewport-local) fixed.
    ZoomAbout {
        /// Zoom multiplier.
        factor: f64,
        /// Viewport-local anchor point.
        anchor: Point,
    },
    /// A drag-pan session began.
    BeginDragPan,
    /// The drag-pan session ended with this release velocity.
    EndDragPan {
        /// Most recent per-event delta.
        velocity: Vec2,
    },
    /// Step the zoom up.
    ZoomIn,
    /// Step the zoom down.
    ZoomOut,
    /// Fit the whole artboard.
    FitToViewport,
    /// Zoom to 100 % and center.
    ActualSize,
}

/// State machine over modifiers and mouse buttons.
#[derive(Clone, Debug, Default)]
pub struct InputMapper {
    chrome_offset: Vec2,
    pan_ready: bool,
    drag: Option<GestureSession>,
}

impl InputMapper {
    /// Creates a mapper for a viewport whose origin sits `chrome_offset`
    /// client pixels from the client origin (e.g. the ruler thickness).
    #[must_use]
    pub fn new(chrome_offset: Vec2) -> Self {
        Self {
            chrome_offset,
            ..Self::default()
        }
    }

    /// Offset subtracted from client positions.
    #[must_use]
    pub fn chrome_offset(&self) -> Vec2 {
        self.chrome_offset
    }

    /// Changes the chrome offset, e.g. when rulers are toggled.
    pub fn set_chrome_offset(&mut self, chrome_offset: Vec2) {
        self.chrome_offset = chrome_offset;
    }

    /// Whether space is held, so a left press would start a drag-pan. Hosts
    /// use this to show a grab cursor.
    #[must_use]
    pub fn is_pan_ready(&self) -> bool {
        self.pan_ready
    }

    /// Whether a drag-pan session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Converts a client position to viewport-local coordinates.
    #[must_use]
    pub fn to_viewport(&self, client: Point) -> Point {
        client - self.chrome_offset
    }

    /// Maps a wheel event.
    pub fn wheel(&self, input: &WheelInput) -> Option<NavAction> {
        let delta = input.delta;
        if !delta.is_finite() {
            return None;
        }
        if input.modifiers.zooms() {
            return Some(NavAction::ZoomAbout {
                factor: WHEEL_ZOOM_BASE.powf(delta.y),
                anchor: self.to_viewport(input.position),
            });
        }
        if input.modifiers.contains(Modifiers::SHIFT) {
            let dx = if delta.x != 0.0 { delta.x } else { delta.y };
            return Some(NavAction::PanBy(Vec2::new(-dx, 0.0)));
        }
        Some(NavAction::PanBy(-delta))
    }

    /// Maps a button press at a client position.
    pub fn mouse_down(&mut self, button: MouseButton, client: Point) -> Option<NavAction> {
        let starts_pan = match button {
            MouseButton::Middle => true,
            MouseButton::Left => self.pan_ready,
            MouseButton::Right | MouseButton::Other(_) => false,
        };
        if !starts_pan || self.drag.is_some() {
            return None;
        }
        debug!(?button, x = client.x, y = client.y, "drag-pan session started");
        self.drag = Some(GestureSession::mouse(client));
        Some(NavAction::BeginDragPan)
    }

    /// Maps a pointer move. Only an active drag-pan produces an action.
    pub fn mouse_move(&mut self, client: Point) -> Option<NavAction> {
        let delta = self.drag.as_mut()?.update(client)?;
        Some(NavAction::PanBy(delta))
    }

    /// Maps a button release. Any release ends an active drag-pan.
    pub fn mouse_up(&mut self, _button: MouseButton) -> Option<NavAction> {
        self.end_drag()
    }

    /// Maps a key press. Space only arms drag-pan and maps to no action.
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> Option<NavAction> {
        match key {
            Key::Space => {
                self.pan_ready = true;
                None
            }
            Key::Character(c) if modifiers.zooms() => match c {
                '=' | '+' => Some(NavAction::ZoomIn),
                '-' => Some(NavAction::ZoomOut),
                '0' => Some(NavAction::FitToViewport),
                '1' => Some(NavAction::ActualSize),
                _ => None,
            },
            Key::Character(_) | Key::Other => None,
        }
    }

    /// Maps a key release. Releasing space ends an active drag-pan, whichever
    /// button started it.
    pub fn key_up(&mut self, key: Key) -> Option<NavAction> {
        if key != Key::Space {
            return None;
        }
        self.pan_ready = false;
        self.end_drag()
    }

    /// Drops any drag-pan session without producing a release velocity.
    /// Returns `true` if one was active.
    pub fn cancel_drag(&mut self) -> bool {
        self.pan_ready = false;
        self.drop_drag()
    }

    /// Like [`InputMapper::cancel_drag`], but space stays armed.
    pub fn drop_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    fn end_drag(&mut self) -> Option<NavAction> {
        let velocity = self.drag.take()?.end();
        debug!(vx = velocity.x, vy = velocity.y, "drag-pan session ended");
        Some(NavAction::EndDragPan { velocity })
    }
}

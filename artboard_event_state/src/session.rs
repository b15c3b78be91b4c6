// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture sessions: incremental deltas and the release velocity sample.
//!
//! ## Usage
//!
//! 1) Begin a session with [`GestureSession::mouse`] (pointer positions) or
//!    [`GestureSession::touch`] (deltas delivered by a gesture recognizer).
//! 2) For pointer input call [`GestureSession::update`] on each move to get
//!    the delta since the last position; for touch input call
//!    [`GestureSession::record_delta`].
//! 3) End the session with [`GestureSession::end`], which consumes it and
//!    returns the velocity sample to hand to the inertia simulator.
//!
//! The release velocity is the most recent per-event delta, not an average.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use artboard_event_state::session::GestureSession;
//!
//! let mut session = GestureSession::mouse(Point::new(10.0, 20.0));
//!
//! // Move to (15, 25): delta is (5, 5).
//! let delta = session.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! // Move again: only the latest delta is kept as velocity.
//! session.update(Point::new(17.0, 26.0));
//! assert_eq!(session.end(), Vec2::new(2.0, 1.0));
//! ```

use kurbo::{Point, Vec2};

/// Input device driving a pan session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Middle-button or space+left-button drag.
    Mouse,
    /// Touch or pen pan reported by a gesture recognizer.
    Touch,
}

/// State of one in-progress pan.
///
/// A session lives exactly as long as one continuous interaction: callers
/// keep it in an `Option` and drop it (via [`GestureSession::end`]) when the
/// interaction finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    kind: GestureKind,
    pans_viewport: bool,
    last_position: Option<Point>,
    velocity_sample: Vec2,
}

impl GestureSession {
    /// Starts a mouse drag-pan at `position`.
    #[must_use]
    pub fn mouse(position: Point) -> Self {
        Self {
            kind: GestureKind::Mouse,
            pans_viewport: true,
            last_position: Some(position),
            velocity_sample: Vec2::ZERO,
        }
    }

    /// Starts a touch pan.
    ///
    /// `pans_viewport` records the decision taken at pan start: when `false`
    /// the session only tracks that a gesture is in progress and the deltas
    /// belong to object manipulation.
    #[must_use]
    pub fn touch(pans_viewport: bool) -> Self {
        Self {
            kind: GestureKind::Touch,
            pans_viewport,
            last_position: None,
            velocity_sample: Vec2::ZERO,
        }
    }

    /// Device driving this session.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Whether this session moves the viewport.
    #[must_use]
    pub fn pans_viewport(&self) -> bool {
        self.pans_viewport
    }

    /// Last pointer position seen, if the session tracks positions.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_position
    }

    /// Most recent delta, used as the release velocity.
    #[must_use]
    pub fn velocity_sample(&self) -> Vec2 {
        self.velocity_sample
    }

    /// Records a new pointer position, returning the delta since the last
    /// one.
    ///
    /// Returns `None` (and only stores the position) when the session had
    /// no previous position.
    pub fn update(&mut self, position: Point) -> Option<Vec2> {
        let last = self.last_position.replace(position)?;
        let delta = position - last;
        self.velocity_sample = delta;
        Some(delta)
    }

    /// Records a delta reported directly by a gesture recognizer.
    pub fn record_delta(&mut self, delta: Vec2) {
        self.velocity_sample = delta;
    }

    /// Ends the session and returns its release velocity.
    ///
    /// Sessions that did not pan the viewport release with zero velocity.
    #[must_use]
    pub fn end(self) -> Vec2 {
        if self.pans_viewport {
            self.velocity_sample
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureKind, GestureSession};

    #[test]
    fn mouse_session_starts_at_position() {
        let session = GestureSession::mouse(Point::new(10.0, 20.0));
        assert_eq!(session.kind(), GestureKind::Mouse);
        assert!(session.pans_viewport());
        assert_eq!(session.last_position(), Some(Point::new(10.0, 20.0)));
        assert_eq!(session.velocity_sample(), Vec2::ZERO);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut session = GestureSession::mouse(Point::new(0.0, 0.0));

        assert_eq!(session.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(session.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(session.update(Point::new(10.0, 10.0)), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(session.velocity_sample(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn negative_movement_deltas() {
        let mut session = GestureSession::mouse(Point::new(100.0, 100.0));
        let delta = session.update(Point::new(90.0, 85.0));
        assert_eq!(delta, Some(Vec2::new(-10.0, -15.0)));
    }

    #[test]
    fn zero_movement_resets_velocity() {
        let mut session = GestureSession::mouse(Point::new(50.0, 50.0));
        session.update(Point::new(60.0, 50.0));
        // Holding still before release should not fling.
        session.update(Point::new(60.0, 50.0));
        assert_eq!(session.end(), Vec2::ZERO);
    }

    #[test]
    fn touch_session_without_position_only_stores_first_point() {
        let mut session = GestureSession::touch(true);
        assert_eq!(session.update(Point::new(1.0, 1.0)), None);
        assert_eq!(session.update(Point::new(4.0, 5.0)), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn touch_deltas_keep_latest_as_velocity() {
        let mut session = GestureSession::touch(true);
        session.record_delta(Vec2::new(12.0, 0.0));
        session.record_delta(Vec2::new(9.0, -1.0));
        assert_eq!(session.end(), Vec2::new(9.0, -1.0));
    }

    #[test]
    fn non_panning_session_releases_without_velocity() {
        let mut session = GestureSession::touch(false);
        session.record_delta(Vec2::new(30.0, 30.0));
        assert!(!session.pans_viewport());
        assert_eq!(session.end(), Vec2::ZERO);
    }

    #[test]
    fn large_coordinate_values() {
        let mut session = GestureSession::mouse(Point::new(1_000_000.0, 2_000_000.0));
        let delta = session.update(Point::new(1_000_001.0, 2_000_002.0));
        assert_eq!(delta, Some(Vec2::new(1.0, 2.0)));
    }
}

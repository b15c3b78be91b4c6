// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum panning after a pan gesture is released.
//!
//! An [`InertiaSimulator`] owns at most one run. Each delivered frame
//! multiplies the velocity by the friction factor and yields the decayed
//! velocity as a pan delta, until both components drop below the stop
//! threshold. Starting a new run, or calling [`InertiaSimulator::cancel`],
//! drops the scheduled frame first, so the simulator never competes with
//! another writer of the pan offset.
//!
//! ```
//! use kurbo::Vec2;
//! use artboard_event_state::frame::ManualScheduler;
//! use artboard_event_state::inertia::{InertiaConfig, InertiaSimulator, InertiaStep};
//!
//! let mut inertia = InertiaSimulator::new(InertiaConfig::default(), ManualScheduler::new()).unwrap();
//! assert!(inertia.start(Vec2::new(10.0, 0.0)));
//!
//! let mut travelled = 0.0;
//! while let Some(frame) = inertia.scheduler_mut().next_frame() {
//!     if let InertiaStep::Pan(delta) = inertia.step(frame) {
//!         travelled += delta.x;
//!     }
//! }
//! assert_eq!(inertia.steps(), 38);
//! assert!(travelled > 80.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;
use tracing::{debug, trace, warn};

use crate::frame::FrameScheduler;

/// Default per-frame velocity multiplier.
pub const DEFAULT_FRICTION: f64 = 0.9;
/// Default speed, in pixels per frame, below which a run stops.
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.2;

/// Tuning for [`InertiaSimulator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InertiaConfig {
    /// Per-frame velocity multiplier, in `[0, 1)`.
    pub friction: f64,
    /// Speed in pixels per frame below which motion stops. Must be positive.
    pub stop_threshold: f64,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
        }
    }
}

impl InertiaConfig {
    /// Checks that a run under this configuration always terminates.
    pub fn validate(&self) -> Result<(), InertiaConfigError> {
        if !(0.0..1.0).contains(&self.friction) {
            return Err(InertiaConfigError::Friction(self.friction));
        }
        if !(self.stop_threshold.is_finite() && self.stop_threshold > 0.0) {
            return Err(InertiaConfigError::StopThreshold(self.stop_threshold));
        }
        Ok(())
    }

    /// Returns `true` unless both components of `velocity` are below the
    /// stop threshold.
    #[must_use]
    pub fn is_moving(&self, velocity: Vec2) -> bool {
        velocity.x.abs() >= self.stop_threshold || velocity.y.abs() >= self.stop_threshold
    }
}

/// Rejected [`InertiaConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InertiaConfigError {
    /// Friction outside `[0, 1)` would never decay (or would oscillate).
    #[error("inertia friction must be in [0, 1), got {0}")]
    Friction(f64),
    /// A non-positive threshold would never be crossed.
    #[error("inertia stop threshold must be positive and finite, got {0}")]
    StopThreshold(f64),
}

/// Outcome of delivering one frame to [`InertiaSimulator::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InertiaStep {
    /// Apply this delta to the pan offset; another frame is scheduled.
    Pan(Vec2),
    /// The run decayed below the threshold and ended. Nothing to apply.
    Finished,
    /// The frame does not belong to the current run (it was cancelled or
    /// superseded). Nothing to apply.
    Stale,
}

/// Frame-driven exponential velocity decay with a single active run.
///
/// Dropping the simulator cancels any scheduled frame.
#[derive(Debug)]
pub struct InertiaSimulator<S: FrameScheduler> {
    config: InertiaConfig,
    scheduler: S,
    velocity: Vec2,
    frame: Option<S::Handle>,
    steps: u32,
}

impl<S: FrameScheduler> InertiaSimulator<S> {
    /// Creates an idle simulator.
    ///
    /// Fails if the configuration could produce a run that never ends.
    pub fn new(config: InertiaConfig, scheduler: S) -> Result<Self, InertiaConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            scheduler,
            velocity: Vec2::ZERO,
            frame: None,
            steps: 0,
        })
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> InertiaConfig {
        self.config
    }

    /// The scheduler frames are requested from.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that pump frames
    /// themselves.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Current velocity; zero when idle.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Whether a run is active (a frame is scheduled).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Frames processed by the current (or most recent) run.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Starts a run with the given release velocity, cancelling any previous
    /// run.
    ///
    /// Returns `false`, leaving the simulator idle, when the velocity is
    /// already below the stop threshold or not finite.
    pub fn start(&mut self, velocity: Vec2) -> bool {
        self.cancel();
        if !velocity.is_finite() || !self.config.is_moving(velocity) {
            return false;
        }
        self.velocity = velocity;
        self.steps = 0;
        self.frame = Some(self.scheduler.request_frame());
        debug!(vx = velocity.x, vy = velocity.y, "inertia run started");
        true
    }

    /// Processes one delivered frame.
    pub fn step(&mut self, frame: S::Handle) -> InertiaStep {
        if self.frame != Some(frame) {
            warn!(?frame, "ignoring stale inertia frame");
            return InertiaStep::Stale;
        }
        self.steps += 1;
        self.velocity = self.velocity * self.config.friction;
        if !self.config.is_moving(self.velocity) {
            self.velocity = Vec2::ZERO;
            self.frame = None;
            debug!(steps = self.steps, "inertia run finished");
            return InertiaStep::Finished;
        }
        self.frame = Some(self.scheduler.request_frame());
        trace!(
            step = self.steps,
            vx = self.velocity.x,
            vy = self.velocity.y,
            "inertia step"
        );
        InertiaStep::Pan(self.velocity)
    }

    /// Stops the current run, dropping its scheduled frame and clearing the
    /// velocity. Returns `false` if nothing was running.
    pub fn cancel(&mut self) -> bool {
        let Some(frame) = self.frame.take() else {
            return false;
        };
        self.scheduler.cancel_frame(frame);
        self.velocity = Vec2::ZERO;
        debug!(steps = self.steps, "inertia run cancelled");
        true
    }
}

impl<S: FrameScheduler> Drop for InertiaSimulator<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

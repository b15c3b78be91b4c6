// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=artboard_event_state --heading-base-level=0

//! Artboard Event State: gesture and momentum state for canvas navigation.
//!
//! This crate provides small, focused state machines for the stateful parts of
//! navigating an artboard. Each module handles one concern:
//!
//! - [`session`]: Track one pan gesture (mouse drag or touch pan), its
//!   incremental deltas and the velocity sample taken at release.
//! - [`frame`]: The animation-frame capability frame-driven behaviors run on,
//!   plus a manual scheduler for hosts and tests that pump frames themselves.
//! - [`inertia`]: Exponential velocity decay after release, with exactly one
//!   active run that can be cancelled at any time.
//!
//! ## Design Philosophy
//!
//! - **Headless**: nothing here touches a viewport directly. The inertia
//!   simulator yields pan deltas; the caller applies them.
//! - **Single active writer**: starting or cancelling inertia always drops the
//!   previously scheduled frame, and a frame delivered after cancellation is
//!   reported as stale instead of moving anything.
//! - **Host-agnostic timing**: frames come from a [`frame::FrameScheduler`]
//!   implementation, so the same code runs under `requestAnimationFrame`, a
//!   native vsync callback or a unit test.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use artboard_event_state::frame::ManualScheduler;
//! use artboard_event_state::inertia::{InertiaConfig, InertiaSimulator, InertiaStep};
//! use artboard_event_state::session::GestureSession;
//!
//! let mut inertia = InertiaSimulator::new(InertiaConfig::default(), ManualScheduler::new()).unwrap();
//!
//! // A quick drag to the right.
//! let mut session = GestureSession::mouse(Point::new(100.0, 100.0));
//! session.update(Point::new(110.0, 100.0));
//! session.update(Point::new(125.0, 100.0));
//!
//! // Release: the last delta becomes the fling velocity.
//! assert!(inertia.start(session.end()));
//!
//! let frame = inertia.scheduler_mut().next_frame().unwrap();
//! assert_eq!(inertia.step(frame), InertiaStep::Pan(Vec2::new(13.5, 0.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod frame;
pub mod inertia;
pub mod session;

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=artboard_navigator --heading-base-level=0

//! Artboard Navigator: input wiring for an artboard viewport.
//!
//! This crate connects raw input to the headless pieces below it:
//!
//! - [`InputMapper`] turns wheel, mouse and keyboard events into
//!   [`NavAction`]s (cursor-anchored wheel zoom, wheel and drag panning, zoom
//!   shortcuts).
//! - [`should_pan_viewport`] decides whether a touch or pen pan moves the
//!   canvas or is left to object manipulation.
//! - [`Navigator`] owns an `artboard_view::ViewportController` and an
//!   `artboard_event_state::inertia::InertiaSimulator`, applies actions and
//!   gesture-recognizer callbacks to them, and keeps exactly one writer of the
//!   pan offset active at a time.
//! - [`SceneRenderer`] is the narrow view of the scene graph navigation needs:
//!   the selection bounds and a switch for its selection handling.
//! - [`Navigator::start`] / [`Navigator::teardown`] scope the window-level
//!   listeners to the navigator's lifetime through a [`ListenerHost`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use artboard_event_state::frame::ManualScheduler;
//! use artboard_navigator::{
//!     Modifiers, Navigator, NavigatorConfig, SceneRenderer, TouchContext, WheelInput,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Scene {
//!     selecting: bool,
//! }
//!
//! impl SceneRenderer for Scene {
//!     fn active_selection_bounds(&self) -> Option<Rect> {
//!         None
//!     }
//!     fn set_selection_mode_enabled(&mut self, enabled: bool) {
//!         self.selecting = enabled;
//!     }
//! }
//!
//! let mut nav = Navigator::new(
//!     NavigatorConfig::default(),
//!     Size::new(800.0, 600.0),
//!     Size::new(744.0, 1052.0),
//!     ManualScheduler::new(),
//!     Scene::default(),
//! )
//! .unwrap();
//!
//! // Ctrl + wheel up zooms in around the cursor.
//! let wheel = WheelInput::new(Vec2::new(0.0, -100.0), Point::new(400.0, 300.0), Modifiers::CTRL);
//! assert!(nav.on_wheel(&wheel));
//! assert!(nav.view().zoom() > 1.1);
//!
//! // A one-finger fling with nothing selected pans, then coasts.
//! assert!(nav.on_pan_start(&TouchContext::fingers(1, false)));
//! nav.on_pan(Vec2::new(0.0, -12.0));
//! nav.on_pan_end();
//! while let Some(frame) = nav.scheduler_mut().next_frame() {
//!     nav.on_animation_frame(frame);
//! }
//! assert!(!nav.inertia().is_running());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod input;
mod lifecycle;
mod mapper;
mod navigator;
mod renderer;
mod touch;

pub use config::NavigatorConfig;
pub use error::NavigatorError;
pub use input::{Key, Modifiers, MouseButton, WheelInput};
pub use lifecycle::{ListenerHost, Subscriptions, WindowListener};
pub use mapper::{InputMapper, NavAction, WHEEL_ZOOM_BASE};
pub use navigator::Navigator;
pub use renderer::SceneRenderer;
pub use touch::{TouchContext, should_pan_viewport};

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=artboard_view --heading-base-level=0

//! Artboard View: the pan/zoom model behind a design canvas.
//!
//! This crate provides a small, headless model of a fixed-size artboard shown
//! through a resizable viewport. It focuses on:
//! - Viewport state (zoom + pan offset) with hard invariants.
//! - Overscroll clamping that keeps the artboard reachable but bounded.
//! - Fitting (whole artboard, width, selection) and centering.
//! - The derived transform the presentation layer applies to the artboard.
//!
//! It does **not** own any scene graph or rendering backend, and it does not
//! interpret input. Callers are expected to:
//! - Feed viewport and artboard size changes into [`ViewportController`].
//! - Read [`ViewportController::transform`] (or subscribe to changes) to
//!   position the artboard, rulers and overlays.
//! - Wire wheel, drag and touch input into pan/zoom calls at a higher layer
//!   (see `artboard_navigator`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use artboard_view::ViewportController;
//!
//! // A US-letter artboard in an 800x600 viewport.
//! let mut view = ViewportController::new(Size::new(800.0, 600.0), Size::new(744.0, 1052.0));
//! view.fit_to_viewport();
//! assert!(view.zoom() < 1.0);
//!
//! // Zoom to 200 % around the cursor: the artboard point under it stays put.
//! let cursor = Point::new(400.0, 300.0);
//! let under_cursor = view.viewport_to_artboard(cursor);
//! view.zoom_to(2.0, Some(cursor));
//! let still_under = view.viewport_to_artboard(cursor);
//! assert!((still_under - under_cursor).hypot() < 1e-6);
//!
//! // CSS for the artboard element (with `transform-origin: 0 0`).
//! let css = view.transform().to_css();
//! assert!(css.starts_with("translate("));
//! ```
//!
//! ## Clamping
//!
//! [`ClampPolicy`] is a pure function and can be used on its own:
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use artboard_view::ClampPolicy;
//!
//! let policy = ClampPolicy::default();
//! let view = Size::new(800.0, 600.0);
//! let content = Size::new(400.0, 1200.0);
//! let once = policy.clamp(Vec2::new(-5_000.0, 5_000.0), view, content);
//! assert_eq!(policy.clamp(once, view, content), once);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a uniform scale; there is no rotation.
//! - The pan offset is the artboard origin in viewport pixels, so the
//!   transform is `viewport = artboard * zoom + pan_offset`.
//! - The pan offset is never stored unclamped. Clamping is recomputed from
//!   scratch on every change rather than adjusted incrementally.
//! - Inertia and input interpretation live in higher-level crates.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod clamp;
mod transform;
mod viewport;
mod zoom;

pub use clamp::{ClampPolicy, DEFAULT_OVERSCROLL};
pub use transform::ArtboardTransform;
pub use viewport::{
    DEFAULT_SELECTION_MARGIN, ListenerId, ViewportConfig, ViewportController, ViewportState,
};
pub use zoom::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP, ZoomLimits, ZoomPreset};

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use artboard_event_state::inertia::InertiaConfig;
use artboard_view::ViewportConfig;

/// Everything a [`Navigator`](crate::Navigator) is configured with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Zoom limits, overscroll, zoom step and selection margin.
    pub viewport: ViewportConfig,
    /// Momentum after a pan is released.
    pub inertia: InertiaConfig,
    /// Offset of the viewport origin from the client origin, e.g. the ruler
    /// thickness. Subtracted from pointer positions before anchor math.
    pub chrome_offset: Vec2,
    /// Let a single finger pan the canvas even when something is selected.
    /// A stylus still manipulates the selection.
    pub finger_pan_priority: bool,
    /// Apply inertia after a mouse drag-pan too, not only after touch pans.
    pub mouse_inertia: bool,
}

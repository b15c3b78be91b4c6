// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::clamp::{ClampPolicy, DEFAULT_OVERSCROLL};
use crate::transform::ArtboardTransform;
use crate::zoom::{DEFAULT_ZOOM_STEP, ZoomLimits, ZoomPreset};

/// Default margin, in viewport pixels, kept around a selection when zooming
/// to it.
pub const DEFAULT_SELECTION_MARGIN: f64 = 40.0;

/// Host-supplied tuning for a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Allowed zoom range.
    pub zoom_limits: ZoomLimits,
    /// Overscroll slack in pixels, see [`ClampPolicy`].
    pub overscroll: f64,
    /// Multiplicative step used by [`ViewportController::zoom_in`] and
    /// [`ViewportController::zoom_out`].
    pub zoom_step: f64,
    /// Margin kept around a selection by
    /// [`ViewportController::zoom_to_selection_bounds`].
    pub selection_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            overscroll: DEFAULT_OVERSCROLL,
            zoom_step: DEFAULT_ZOOM_STEP,
            selection_margin: DEFAULT_SELECTION_MARGIN,
        }
    }
}

/// Snapshot of the navigation state owned by a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Current zoom factor, always within the configured limits.
    pub zoom: f64,
    /// Artboard origin in viewport pixels, always clamped.
    pub pan_offset: Vec2,
    /// Viewport size in pixels.
    pub viewport_size: Size,
}

/// Handle returned by [`ViewportController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ArtboardTransform)>;

/// Owns the artboard zoom and pan offset and keeps them valid.
///
/// Every operation is total: out-of-range requests are clamped and
/// degenerate inputs become no-ops. After any call:
/// - `zoom` lies within the configured [`ZoomLimits`].
/// - `pan_offset` is the [`ClampPolicy`] output for the current viewport
///   size, zoom, and artboard size.
///
/// Subscribers registered with [`ViewportController::subscribe`] are called
/// synchronously after each committed change.
pub struct ViewportController {
    zoom: f64,
    pan_offset: Vec2,
    viewport_size: Size,
    artboard_size: Size,
    limits: ZoomLimits,
    policy: ClampPolicy,
    zoom_step: f64,
    selection_margin: f64,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("zoom", &self.zoom)
            .field("pan_offset", &self.pan_offset)
            .field("viewport_size", &self.viewport_size)
            .field("artboard_size", &self.artboard_size)
            .field("limits", &self.limits)
            .field("policy", &self.policy)
            .field("zoom_step", &self.zoom_step)
            .field("selection_margin", &self.selection_margin)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ViewportController {
    /// Creates a controller with the default configuration.
    ///
    /// Initial zoom is `1.0` (clamped into the limits) and the pan offset
    /// starts at the clamped origin.
    #[must_use]
    pub fn new(viewport_size: Size, artboard_size: Size) -> Self {
        Self::with_config(ViewportConfig::default(), viewport_size, artboard_size)
    }

    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn with_config(config: ViewportConfig, viewport_size: Size, artboard_size: Size) -> Self {
        let zoom_step = if config.zoom_step.is_finite() && config.zoom_step > 1.0 {
            config.zoom_step
        } else {
            DEFAULT_ZOOM_STEP
        };
        let selection_margin = if config.selection_margin.is_finite() {
            config.selection_margin.max(0.0)
        } else {
            0.0
        };
        let mut vc = Self {
            zoom: config.zoom_limits.clamp(1.0),
            pan_offset: Vec2::ZERO,
            viewport_size,
            artboard_size,
            limits: config.zoom_limits,
            policy: ClampPolicy::new(config.overscroll),
            zoom_step,
            selection_margin,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        };
        vc.pan_offset = vc.clamped(vc.zoom, vc.pan_offset);
        vc
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current zoom as a percentage rounded for display.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        (self.zoom * 100.0).round()
    }

    /// Current pan offset (artboard origin in viewport pixels).
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Artboard size in content pixels.
    #[must_use]
    pub fn artboard_size(&self) -> Size {
        self.artboard_size
    }

    /// Artboard size on screen at the current zoom.
    #[must_use]
    pub fn scaled_artboard_size(&self) -> Size {
        self.scaled_size(self.zoom)
    }

    /// Configured zoom range.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Clamp policy in effect.
    #[must_use]
    pub fn clamp_policy(&self) -> ClampPolicy {
        self.policy
    }

    /// Counter bumped on every committed change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the navigation state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            zoom: self.zoom,
            pan_offset: self.pan_offset,
            viewport_size: self.viewport_size,
        }
    }

    /// Transform the presentation layer applies to the artboard.
    #[must_use]
    pub fn transform(&self) -> ArtboardTransform {
        ArtboardTransform {
            translate: self.pan_offset,
            scale: self.zoom,
        }
    }

    /// Registers a callback run after every committed change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ArtboardTransform) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Removes every callback.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Replaces the zoom range and re-clamps zoom and pan into it.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.commit(limits.clamp(self.zoom), self.pan_offset, false);
    }

    /// Pans by `delta` viewport pixels.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.commit(self.zoom, self.pan_offset + delta, false);
    }

    /// Zooms to `new_zoom`, clamped into the limits.
    ///
    /// With an `anchor` (in viewport pixels) the artboard point under the
    /// anchor stays put. Without one the pan offset is kept as is and only
    /// re-clamped. Requests at or below zero land on the lower limit and an
    /// infinite request on the upper one; NaN is ignored.
    pub fn zoom_to(&mut self, new_zoom: f64, anchor: Option<Point>) {
        if new_zoom.is_nan() {
            return;
        }
        let zoom = if new_zoom <= 0.0 {
            self.limits.min()
        } else {
            self.limits.clamp(new_zoom)
        };
        let pan = match anchor {
            Some(anchor) => {
                let ratio = zoom / self.zoom;
                let anchor = anchor.to_vec2();
                anchor - (anchor - self.pan_offset) * ratio
            }
            None => self.pan_offset,
        };
        self.commit(zoom, pan, false);
    }

    /// Multiplies the zoom by `factor`, see [`ViewportController::zoom_to`].
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Point>) {
        self.zoom_to(self.zoom * factor, anchor);
    }

    /// Steps the zoom up by the configured step.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.zoom_step, None);
    }

    /// Steps the zoom down by the configured step.
    pub fn zoom_out(&mut self) {
        self.zoom_by(self.zoom_step.recip(), None);
    }

    /// Steps the zoom up, keeping `anchor` fixed.
    pub fn zoom_in_at(&mut self, anchor: Point) {
        self.zoom_by(self.zoom_step, Some(anchor));
    }

    /// Steps the zoom down, keeping `anchor` fixed.
    pub fn zoom_out_at(&mut self, anchor: Point) {
        self.zoom_by(self.zoom_step.recip(), Some(anchor));
    }

    /// Jumps to a named zoom level, keeping the viewport center fixed.
    pub fn zoom_to_preset(&mut self, preset: ZoomPreset) {
        let center = self.viewport_center();
        self.zoom_to(preset.factor(), Some(center));
    }

    /// Returns to 100 % with the artboard centered.
    pub fn reset_zoom(&mut self) {
        let zoom = self.limits.clamp(1.0);
        self.commit(zoom, self.centered_offset(zoom), false);
    }

    /// Fits the whole artboard into the viewport, never enlarging past 100 %,
    /// and centers it.
    pub fn fit_to_viewport(&mut self) {
        let fit = fit_ratio(self.viewport_size.width, self.artboard_size.width)
            .min(fit_ratio(self.viewport_size.height, self.artboard_size.height))
            .min(1.0);
        let zoom = self.limits.clamp(fit);
        self.commit(zoom, self.centered_offset(zoom), false);
    }

    /// Fits the artboard width into the viewport.
    ///
    /// The artboard is centered horizontally. Vertically it is top aligned
    /// when taller than the viewport and centered otherwise. A degenerate
    /// width keeps the current zoom.
    pub fn fit_to_width(&mut self) {
        let fit = fit_ratio(self.viewport_size.width, self.artboard_size.width);
        let zoom = if fit.is_finite() {
            self.limits.clamp(fit)
        } else {
            self.zoom
        };
        let centered = self.centered_offset(zoom);
        let y = if self.scaled_size(zoom).height > self.viewport_size.height {
            0.0
        } else {
            centered.y
        };
        self.commit(zoom, Vec2::new(centered.x, y), false);
    }

    /// Centers the artboard without changing the zoom.
    pub fn center_artboard(&mut self) {
        self.commit(self.zoom, self.centered_offset(self.zoom), false);
    }

    /// Zooms so that `bounds` (artboard space) fits inside the viewport minus
    /// the selection margin, and centers it.
    ///
    /// A selection without area (a point or a straight line) changes nothing
    /// and returns `false`.
    pub fn zoom_to_selection_bounds(&mut self, bounds: Rect) -> bool {
        let bounds = bounds.abs();
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return false;
        }
        let margin = self.selection_margin * 2.0;
        let available = |extent: f64| {
            if extent - margin > 0.0 {
                extent - margin
            } else {
                extent
            }
        };
        let fit = fit_ratio(available(self.viewport_size.width), bounds.width())
            .min(fit_ratio(available(self.viewport_size.height), bounds.height()));
        if !fit.is_finite() {
            return false;
        }
        let zoom = self.limits.clamp(fit);
        let center = bounds.center().to_vec2();
        let pan = self.viewport_center().to_vec2() - center * zoom;
        self.commit(zoom, pan, false);
        true
    }

    /// Updates the viewport size and re-clamps the pan offset. The zoom is
    /// left untouched.
    pub fn resize(&mut self, viewport_size: Size) {
        if self.viewport_size == viewport_size {
            return;
        }
        self.viewport_size = viewport_size;
        self.commit(self.zoom, self.pan_offset, true);
    }

    /// Updates the artboard size and re-clamps the pan offset.
    pub fn set_artboard_size(&mut self, artboard_size: Size) {
        if self.artboard_size == artboard_size {
            return;
        }
        self.artboard_size = artboard_size;
        self.commit(self.zoom, self.pan_offset, true);
    }

    /// Maps an artboard point into viewport pixels.
    #[must_use]
    pub fn artboard_to_viewport(&self, pt: Point) -> Point {
        self.transform().apply(pt)
    }

    /// Maps a viewport pixel onto the artboard.
    #[must_use]
    pub fn viewport_to_artboard(&self, pt: Point) -> Point {
        self.transform().invert(pt)
    }

    /// Maps an artboard rectangle (for example a table cell) into viewport
    /// pixels so overlays can line up with it.
    #[must_use]
    pub fn artboard_rect_to_viewport(&self, rect: Rect) -> Rect {
        self.transform().apply_rect(rect)
    }

    /// Portion of the artboard plane currently visible.
    #[must_use]
    pub fn visible_artboard_rect(&self) -> Rect {
        self.transform()
            .invert_rect(Rect::from_origin_size(Point::ZERO, self.viewport_size))
    }

    /// Suggests a "nice" ruler tick spacing in artboard units for the current
    /// zoom.
    ///
    /// Ticks end up roughly 64 px apart on screen (using a 1-2-5 ladder),
    /// with `base` treated as a lower bound on the spacing.
    #[must_use]
    pub fn suggest_ruler_spacing(&self, base: f64) -> f64 {
        let base = base.abs().max(f64::MIN_POSITIVE);
        let target_px = 64.0_f64;
        let mut desired = target_px / self.zoom;
        if desired < base {
            desired = base;
        }
        if !desired.is_finite() {
            return desired;
        }

        let mut unit = 1.0_f64;
        while unit * 10.0 <= desired {
            unit *= 10.0;
        }
        while unit > desired {
            unit /= 10.0;
        }

        loop {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * unit;
                if step >= desired {
                    return step;
                }
            }
            unit *= 10.0;
        }
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport_size.width / 2.0, self.viewport_size.height / 2.0)
    }

    fn scaled_size(&self, zoom: f64) -> Size {
        Size::new(
            self.artboard_size.width.max(0.0) * zoom,
            self.artboard_size.height.max(0.0) * zoom,
        )
    }

    fn centered_offset(&self, zoom: f64) -> Vec2 {
        let scaled = self.scaled_size(zoom);
        Vec2::new(
            (self.viewport_size.width.max(0.0) - scaled.width) / 2.0,
            (self.viewport_size.height.max(0.0) - scaled.height) / 2.0,
        )
    }

    fn clamped(&self, zoom: f64, proposed: Vec2) -> Vec2 {
        self.policy
            .clamp(proposed, self.viewport_size, self.scaled_size(zoom))
    }

    fn commit(&mut self, zoom: f64, proposed: Vec2, sizes_changed: bool) {
        let pan = self.clamped(zoom, proposed);
        if !sizes_changed && zoom == self.zoom && pan == self.pan_offset {
            return;
        }
        self.zoom = zoom;
        self.pan_offset = pan;
        self.revision += 1;
        let transform = self.transform();
        for (_, listener) in &mut self.listeners {
            listener(&transform);
        }
    }
}

/// Scale that fits `content` into `view`, or infinity when either extent
/// is degenerate (so the axis does not constrain).
fn fit_ratio(view: f64, content: f64) -> f64 {
    if view > 0.0 && content > 0.0 {
        view / content
    } else {
        f64::INFINITY
    }
}

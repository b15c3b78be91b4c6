// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// The parts of the scene-graph renderer that navigation depends on.
///
/// The renderer owns objects and their selection; navigation only reads the
/// selection bounds and switches the renderer's own selection/drag handling
/// off while the canvas is being panned.
pub trait SceneRenderer {
    /// Bounds of the active selection in artboard coordinates, if any.
    fn active_selection_bounds(&self) -> Option<Rect>;

    /// Enables or disables object selection and dragging.
    fn set_selection_mode_enabled(&mut self, enabled: bool);

    /// Whether anything is selected.
    fn has_selection(&self) -> bool {
        self.active_selection_bounds().is_some()
    }
}

impl<R: SceneRenderer + ?Sized> SceneRenderer for &mut R {
    fn active_selection_bounds(&self) -> Option<Rect> {
        (**self).active_selection_bounds()
    }

    fn set_selection_mode_enabled(&mut self, enabled: bool) {
        (**self).set_selection_mode_enabled(enabled);
    }

    fn has_selection(&self) -> bool {
        (**self).has_selection()
    }
}

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Rect, Vec2};

/// Where and how large the artboard appears inside the viewport.
///
/// This is the read-only view of the viewport state handed to the
/// presentation layer. Artboard coordinates map to viewport pixels as
/// `viewport = artboard * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtboardTransform {
    /// Offset of the artboard origin in viewport pixels.
    pub translate: Vec2,
    /// Uniform scale (the zoom factor).
    pub scale: f64,
}

impl Default for ArtboardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ArtboardTransform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the transform as an affine map from artboard to viewport space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Formats the transform as a CSS `transform` value.
    ///
    /// The artboard element is expected to use `transform-origin: 0 0`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// Maps an artboard point into viewport pixels.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translate.x,
            pt.y * self.scale + self.translate.y,
        )
    }

    /// Maps a viewport pixel back onto the artboard.
    ///
    /// A degenerate scale maps everything onto the artboard origin shifted
    /// by the translation rather than dividing by zero.
    #[must_use]
    pub fn invert(&self, pt: Point) -> Point {
        if self.scale <= 0.0 {
            return Point::new(pt.x - self.translate.x, pt.y - self.translate.y);
        }
        Point::new(
            (pt.x - self.translate.x) / self.scale,
            (pt.y - self.translate.y) / self.scale,
        )
    }

    /// Maps an artboard rectangle into viewport pixels.
    ///
    /// The transform is axis aligned with a positive scale, so mapping the
    /// two corners is enough.
    #[must_use]
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(self.apply(rect.origin()), self.apply(Point::new(rect.x1, rect.y1)))
    }

    /// Maps a viewport rectangle back onto the artboard.
    #[must_use]
    pub fn invert_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.invert(rect.origin()),
            self.invert(Point::new(rect.x1, rect.y1)),
        )
    }
}

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;
/// Default multiplicative step for [`crate::ViewportController::zoom_in`] and
/// [`crate::ViewportController::zoom_out`].
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

/// Inclusive zoom range supplied by the host.
///
/// The range is normalized so that `min <= max`, and both bounds are finite
/// and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawZoomLimits"))]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomLimits {
    /// Creates a normalized zoom range.
    ///
    /// Inverted bounds are swapped. A bound that is not finite or not
    /// positive is replaced by its default.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            DEFAULT_MIN_ZOOM
        };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            DEFAULT_MAX_ZOOM
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Returns `true` when `zoom` lies within the range.
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawZoomLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl From<RawZoomLimits> for ZoomLimits {
    fn from(raw: RawZoomLimits) -> Self {
        Self::new(raw.min, raw.max)
    }
}

/// Named zoom levels offered by the zoom menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomPreset {
    /// 25 %.
    Quarter,
    /// 50 %.
    Half,
    /// 75 %.
    ThreeQuarters,
    /// 100 %.
    Actual,
    /// 150 %.
    OneAndHalf,
    /// 200 %.
    Double,
    /// 300 %.
    Triple,
    /// 400 %.
    Quadruple,
}

impl ZoomPreset {
    /// All presets in ascending order.
    pub const ALL: [Self; 8] = [
        Self::Quarter,
        Self::Half,
        Self::ThreeQuarters,
        Self::Actual,
        Self::OneAndHalf,
        Self::Double,
        Self::Triple,
        Self::Quadruple,
    ];

    /// Zoom percentage shown to the user.
    #[must_use]
    pub fn percent(self) -> u16 {
        match self {
            Self::Quarter => 25,
            Self::Half => 50,
            Self::ThreeQuarters => 75,
            Self::Actual => 100,
            Self::OneAndHalf => 150,
            Self::Double => 200,
            Self::Triple => 300,
            Self::Quadruple => 400,
        }
    }

    /// Zoom factor (`1.0` is 100 %).
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// Returns the preset whose percentage is exactly `percent`, if any.
    #[must_use]
    pub fn from_percent(percent: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.percent() == percent)
    }
}

// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use artboard_event_state::inertia::InertiaConfigError;

/// Errors from [`Navigator::new`](crate::Navigator::new).
///
/// Nothing after construction can fail: out-of-range input is clamped.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum NavigatorError {
    /// The inertia configuration would never come to rest.
    #[error("invalid inertia configuration: {0}")]
    Inertia(#[from] InertiaConfigError),
}

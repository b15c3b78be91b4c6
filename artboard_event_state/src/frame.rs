// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-frame scheduling.
//!
//! Frame-driven behaviors such as inertia never block. They ask a
//! [`FrameScheduler`] for a callback on the next display refresh and do one
//! step of work when the host delivers it. In a browser the scheduler wraps
//! `requestAnimationFrame`; in tests [`ManualScheduler`] queues the requests
//! so frames can be stepped synchronously.

use alloc::collections::VecDeque;
use core::fmt::Debug;

/// Capability to request and cancel a callback on the next frame.
pub trait FrameScheduler {
    /// Identifies one requested frame.
    type Handle: Copy + PartialEq + Debug;

    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> Self::Handle;

    /// Drops a previously requested callback. Cancelling a handle that
    /// already fired or was already cancelled must be harmless.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Handle issued by [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// A scheduler that only records requests.
///
/// The host (or a test) pulls pending frames with
/// [`ManualScheduler::next_frame`] and delivers them itself.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameId>,
    cancelled: usize,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest pending frame.
    pub fn next_frame(&mut self) -> Option<FrameId> {
        self.pending.pop_front()
    }

    /// Number of frames requested and not yet delivered or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending frames that were cancelled.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameId;

    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push_back(id);
        id
    }

    fn cancel_frame(&mut self, handle: FrameId) {
        let before = self.pending.len();
        self.pending.retain(|id| *id != handle);
        self.cancelled += before - self.pending.len();
    }
}

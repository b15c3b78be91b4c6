// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level listener registration scoped to a navigator's lifetime.
//!
//! Drag-pan must keep working when the pointer leaves the viewport, and the
//! viewport must follow window resizes, so the navigator needs a few
//! listeners on the window itself. They are installed once by
//! [`Navigator::start`](crate::Navigator::start), which returns a
//! [`Subscriptions`] set, and removed once by
//! [`Navigator::teardown`](crate::Navigator::teardown), which consumes it.

use alloc::vec::Vec;

use tracing::warn;

/// A window-level event the navigator listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowListener {
    /// Window resized; forward the new viewport size.
    Resize,
    /// Pointer moved anywhere in the window.
    MouseMove,
    /// Button released anywhere in the window.
    MouseUp,
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
}

impl WindowListener {
    /// Every listener a navigator installs.
    pub const ALL: [Self; 5] = [
        Self::Resize,
        Self::MouseMove,
        Self::MouseUp,
        Self::KeyDown,
        Self::KeyUp,
    ];
}

/// Host capability to attach and detach window listeners.
pub trait ListenerHost {
    /// Identifies one attached listener.
    type Token;

    /// Attaches a listener, returning the token that removes it.
    fn add(&mut self, listener: WindowListener) -> Self::Token;

    /// Detaches a listener.
    fn remove(&mut self, token: Self::Token);
}

/// The set of listeners installed by one [`Navigator::start`](crate::Navigator::start).
///
/// Dispose it exactly once with [`Subscriptions::dispose`] (or
/// [`Navigator::teardown`](crate::Navigator::teardown)). Dropping an
/// undisposed set leaks the host listeners and logs a warning.
#[derive(Debug)]
#[must_use = "window listeners stay attached until the subscriptions are disposed"]
pub struct Subscriptions<T> {
    tokens: Vec<(WindowListener, T)>,
}

impl<T> Subscriptions<T> {
    /// Attaches every [`WindowListener`] to `host`.
    pub fn install<H: ListenerHost<Token = T>>(host: &mut H) -> Self {
        let tokens = WindowListener::ALL
            .into_iter()
            .map(|listener| (listener, host.add(listener)))
            .collect();
        Self { tokens }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Listeners in installation order.
    pub fn listeners(&self) -> impl Iterator<Item = WindowListener> + '_ {
        self.tokens.iter().map(|(listener, _)| *listener)
    }

    /// Detaches every listener from `host`.
    pub fn dispose<H: ListenerHost<Token = T>>(mut self, host: &mut H) {
        for (_, token) in self.tokens.drain(..) {
            host.remove(token);
        }
    }
}

impl<T> Drop for Subscriptions<T> {
    fn drop(&mut self) {
        if !self.tokens.is_empty() {
            warn!(
                count = self.tokens.len(),
                "window listener subscriptions dropped without teardown"
            );
        }
    }
}

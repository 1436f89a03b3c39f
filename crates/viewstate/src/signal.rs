//! The process-wide window-size observable.

use std::sync::Arc;

use tokio::sync::watch;

/// Viewport dimensions reported by the host shell, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// Broadcasts the current window size to mounted components.
///
/// The host shell owns one signal for the whole process and publishes
/// into it on every resize; components subscribe for their mounted
/// lifetime. Unsubscription is dropping the receiver, so a component that
/// stores its receiver as a field cannot outlive its subscription.
/// [`Self::subscriber_count`] exposes the subscription lifecycle.
#[derive(Clone)]
pub struct WindowSizeSignal {
    inner: Arc<SignalInner>,
}

struct SignalInner {
    size: watch::Sender<WindowSize>,
}

impl WindowSizeSignal {
    /// Create a signal seeded with the initial window size.
    #[must_use]
    pub fn new(initial: WindowSize) -> Self {
        let (size, _) = watch::channel(initial);
        Self {
            inner: Arc::new(SignalInner { size }),
        }
    }

    /// Publish a new window size.
    ///
    /// Unchanged sizes are not re-broadcast, so resize floods that settle
    /// on the same dimensions wake no subscribers.
    pub fn publish(&self, size: WindowSize) {
        self.inner.size.send_if_modified(|current| {
            if *current == size {
                false
            } else {
                *current = size;
                true
            }
        });
    }

    /// Subscribe for the caller's mounted lifetime.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WindowSize> {
        self.inner.size.subscribe()
    }

    /// Snapshot the current window size.
    #[must_use]
    pub fn current(&self) -> WindowSize {
        *self.inner.size.borrow()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.size.receiver_count()
    }
}

//! The tri-state fetch lifecycle shared by every page controller.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// The observable status of one fetch operation.
///
/// Transitions are monotonic within a single fetch: `Loading` settles into
/// exactly one of `Ready` or `Failed`. Starting a new fetch resets the
/// machine to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// A fetch is outstanding.
    Loading,
    /// The fetch resolved; the payload is current.
    Ready(T),
    /// The fetch failed; the message is ready to show to the user.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the fetch settled with a payload.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether the fetch settled with a failure.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The payload, if the state is `Ready`.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// The failure message, if the state is `Failed`.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// Drives the fetch lifecycle for one page's worth of state.
///
/// Cheaply cloneable; all clones publish into the same `watch` channel.
/// The channel is seeded with [`FetchState::Loading`] so a page that
/// fetches on mount can never be observed idle: `mount` constructs the
/// controller and starts the fetch back to back.
///
/// Background fetch tasks hold only a [`std::sync::Weak`] reference to the
/// shared state. If every handle is dropped before a fetch resolves, the
/// resolution is discarded instead of mutating torn-down state.
pub struct FetchController<T> {
    inner: Arc<ControllerInner<T>>,
}

struct ControllerInner<T> {
    state: watch::Sender<FetchState<T>>,
    in_flight: AtomicBool,
}

impl<T> FetchController<T> {
    /// Create a controller seeded in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            inner: Arc::new(ControllerInner {
                state,
                in_flight: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribe to state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// Snapshot the current state.
    #[must_use]
    pub fn state(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// Start `fetch` in the background, transitioning to `Loading` before
    /// this call returns.
    ///
    /// At most one fetch runs per controller: returns `false` without
    /// starting (and without resetting the state) when one is already in
    /// flight. The error is rendered with `Display` into
    /// [`FetchState::Failed`], so callers hand in futures whose errors are
    /// already user-facing messages.
    pub fn spawn_load<F, E>(&self, fetch: F) -> bool
    where
        T: Send + Sync + 'static,
        E: fmt::Display + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        if self.inner.in_flight.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.inner.state.send_replace(FetchState::Loading);

        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            let outcome = fetch.await;
            let Some(inner) = weak.upgrade() else {
                debug!("fetch resolved after controller teardown; discarding");
                return;
            };
            inner.in_flight.store(false, Ordering::Release);
            inner.state.send_replace(terminal(outcome));
        });
        true
    }

    /// Run `fetch` in place, transitioning to `Loading` first and settling
    /// into the terminal state before returning.
    ///
    /// Same single-fetch guarantee as [`Self::spawn_load`]: returns `false`
    /// without running when a fetch is already in flight.
    pub async fn load<F, E>(&self, fetch: F) -> bool
    where
        T: Send + Sync,
        E: fmt::Display,
        F: Future<Output = Result<T, E>> + Send,
    {
        if self.inner.in_flight.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.inner.state.send_replace(FetchState::Loading);

        let outcome = fetch.await;
        self.inner.in_flight.store(false, Ordering::Release);
        self.inner.state.send_replace(terminal(outcome));
        true
    }

    /// Apply `f` to the payload if and only if the state is `Ready`.
    ///
    /// This is the optimistic-mutation entry point: acknowledged writes
    /// edit the last-known-good payload in place. Returns `false` (and
    /// never calls `f`) in `Loading` or `Failed`.
    pub fn mutate<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        self.inner.state.send_if_modified(|state| match state {
            FetchState::Ready(value) => {
                f(value);
                true
            }
            FetchState::Loading | FetchState::Failed(_) => false,
        })
    }
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal<T, E: fmt::Display>(outcome: Result<T, E>) -> FetchState<T> {
    match outcome {
        Ok(value) => FetchState::Ready(value),
        Err(message) => FetchState::Failed(message.to_string()),
    }
}

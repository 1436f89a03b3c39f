//! Transient write-outcome notices.
//!
//! Write failures must not disturb the fetch lifecycle: a failed create on
//! an already-loaded admin page keeps the page `Ready` and raises a
//! banner here instead. Notices clear themselves after [`AUTO_CLEAR`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// How long a posted notice stays up before the board clears it.
pub const AUTO_CLEAR: Duration = Duration::from_secs(3);

/// Visual tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, user-facing notice about a write outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Publishes at most one notice at a time and clears it on a timer.
///
/// Posting replaces whatever notice is up and restarts the clock; each
/// sweep carries a ticket so a superseded notice's sweep cannot clear its
/// successor. Cheaply cloneable.
#[derive(Clone)]
pub struct NoticeBoard {
    inner: Arc<BoardInner>,
}

struct BoardInner {
    current: watch::Sender<Option<Notice>>,
    sequence: AtomicU64,
}

impl NoticeBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            inner: Arc::new(BoardInner {
                current,
                sequence: AtomicU64::new(0),
            }),
        }
    }

    /// Publish `notice`, replacing any notice already up, and schedule it
    /// to clear after [`AUTO_CLEAR`].
    ///
    /// Must be called within a tokio runtime. The sweep task holds only a
    /// [`std::sync::Weak`] reference, so dropping the board cancels
    /// outstanding sweeps.
    pub fn post(&self, notice: Notice) {
        let ticket = self.inner.sequence.fetch_add(1, Ordering::AcqRel) + 1;
        self.inner.current.send_replace(Some(notice));

        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_CLEAR).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // A newer post or dismiss owns the board now; leave it alone.
            if inner.sequence.load(Ordering::Acquire) == ticket {
                inner.current.send_replace(None);
            }
        });
    }

    /// Clear the current notice immediately.
    pub fn dismiss(&self) {
        self.inner.sequence.fetch_add(1, Ordering::AcqRel);
        self.inner.current.send_replace(None);
    }

    /// Snapshot the notice currently up, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        self.inner.current.borrow().clone()
    }

    /// Subscribe to notice changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.inner.current.subscribe()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

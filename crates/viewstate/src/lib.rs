//! Alt Store ViewState - Fetch lifecycle and transient UI state.
//!
//! Every Alt Store page follows the same shape: kick off a fetch when the
//! page mounts, show a loading treatment, then settle into either the
//! payload or a user-facing failure message. This crate implements that
//! shape once, entity-agnostically, instead of letting each page grow its
//! own copy:
//!
//! - [`fetch`] - the `Loading -> Ready | Failed` machine behind every page
//! - [`notice`] - transient write-outcome banners with auto-clear
//! - [`signal`] - the process-wide window-size observable
//!
//! # Architecture
//!
//! All state is published through `tokio::sync::watch` channels, so the
//! Presentation Layer observes by subscribing rather than polling, and
//! teardown is ordinary `Drop`. Background tasks hold only `Weak`
//! references to controller state: a fetch that resolves after its page
//! was torn down is discarded, never applied.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fetch;
pub mod notice;
pub mod signal;

pub use fetch::{FetchController, FetchState};
pub use notice::{AUTO_CLEAR, Notice, NoticeBoard, NoticeLevel};
pub use signal::{WindowSize, WindowSizeSignal};

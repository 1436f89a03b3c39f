//! Navigation chrome state.

use alt_store_viewstate::{WindowSize, WindowSizeSignal};
use tokio::sync::watch;

/// Width at and above which the chrome shows the desktop call-to-action.
pub const DESKTOP_BREAKPOINT: u32 = 768;

/// State behind the store's navigation bar: the hamburger menu toggle and
/// the responsive breakpoint.
///
/// Holds its window-size subscription as a field, so dropping the chrome
/// is the unsubscription; a torn-down chrome cannot leak a listener.
pub struct NavChrome {
    expanded: bool,
    window: watch::Receiver<WindowSize>,
}

impl NavChrome {
    /// Mount the chrome, subscribing to the window-size signal for the
    /// chrome's lifetime.
    #[must_use]
    pub fn mount(signal: &WindowSizeSignal) -> Self {
        Self {
            expanded: false,
            window: signal.subscribe(),
        }
    }

    /// Whether the hamburger menu is expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Toggle the hamburger menu.
    pub const fn toggle_menu(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the desktop call-to-action should be shown at the current
    /// window width.
    #[must_use]
    pub fn show_desktop_cta(&self) -> bool {
        self.window.borrow().width >= DESKTOP_BREAKPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn size(width: u32) -> WindowSize {
        WindowSize { width, height: 900 }
    }

    #[test]
    fn test_menu_starts_collapsed_and_toggles() {
        let signal = WindowSizeSignal::new(size(1280));
        let mut chrome = NavChrome::mount(&signal);

        assert!(!chrome.is_expanded());
        chrome.toggle_menu();
        assert!(chrome.is_expanded());
        chrome.toggle_menu();
        assert!(!chrome.is_expanded());
    }

    #[test]
    fn test_desktop_cta_follows_breakpoint() {
        let signal = WindowSizeSignal::new(size(767));
        let chrome = NavChrome::mount(&signal);
        assert!(!chrome.show_desktop_cta());

        signal.publish(size(768));
        assert!(chrome.show_desktop_cta());

        signal.publish(size(320));
        assert!(!chrome.show_desktop_cta());
    }

    #[test]
    fn test_dropping_chrome_releases_subscription() {
        let signal = WindowSizeSignal::new(size(1024));
        let chrome = NavChrome::mount(&signal);
        assert_eq!(signal.subscriber_count(), 1);

        drop(chrome);
        assert_eq!(signal.subscriber_count(), 0);
    }
}

//! Ephemeral view state for the page chrome.
//!
//! The navbar owns two boolean flags (scrolled treatment, mobile menu)
//! and every animated section owns a fire-once reveal latch. All of it
//! is plain data here, so the transitions can be driven with synthetic
//! scroll offsets and visibility observations instead of a live DOM.

/// Scroll offset (CSS pixels) past which the navbar switches to its
/// opaque, blurred treatment.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the navbar should render its scrolled treatment.
///
/// Pure function of the current offset. Scroll direction and history
/// are irrelevant; the window handler simply recomputes this on every
/// scroll event.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

/// Mobile menu flag with idempotent transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the full-screen overlay is showing.
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// The menu control was activated. No-op when already open.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// The close control was activated. No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A navigation link inside the menu was activated. Selecting a
    /// destination always closes the overlay, whichever link it was.
    pub fn select_link(&mut self) {
        self.close();
    }
}

/// Fire-once latch for viewport-entry animations.
///
/// The first intersection reveals the element; later exits and
/// re-entries are ignored for the lifetime of the mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one visibility observation and return the latched state.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.revealed = true;
        }
        self.revealed
    }

    /// Whether the entrance animation has been applied.
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_treatment_flips_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4_000.0));
    }

    #[test]
    fn scroll_treatment_ignores_direction_and_history() {
        // Same offsets, visited scrolling down then back up, must give
        // the same answers both times.
        let offsets = [0.0, 30.0, 80.0, 200.0, 80.0, 30.0, 0.0];
        let states: Vec<bool> = offsets.iter().map(|&y| is_scrolled(y)).collect();
        assert_eq!(states, vec![false, false, true, true, true, false, false]);
    }

    #[test]
    fn menu_open_and_close_are_idempotent() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.close();
        assert!(!menu.is_open());

        menu.open();
        menu.open();
        assert!(menu.is_open());

        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_any_link_closes_the_menu() {
        let mut menu = MenuState::default();
        menu.open();
        menu.select_link();
        assert!(!menu.is_open());

        // Selecting while already closed stays closed.
        menu.select_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn reveal_latch_fires_once_and_never_replays() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // Scrolled out of view and back in: still revealed, no replay.
        assert!(latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }
}

//! Scroll and navigation state: which section is active, whether the page
//! has been scrolled past the header threshold, and the one-shot scroll
//! request the view consumes to bring a section's anchor into view.

use crate::section::Section;

/// Vertical offset (logical pixels) past which the page counts as scrolled.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Tracks the active section and the scrolled flag.
///
/// The view registers an anchor for every section it lays out; selecting a
/// section whose anchor was never registered is a silent no-op. A successful
/// selection records the section as active and emits a scroll request that
/// the view consumes exactly once.
#[derive(Debug, Clone)]
pub struct NavCoordinator {
    active: Section,
    scrolled: bool,
    registered: [bool; Section::ALL.len()],
    scroll_request: Option<Section>,
}

impl NavCoordinator {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
            scrolled: false,
            registered: [false; Section::ALL.len()],
            scroll_request: None,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether the page is scrolled past [`SCROLL_THRESHOLD`].
    ///
    /// Recomputed on every scroll but currently unused for the header
    /// background, which stays transparent at any offset.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute the scrolled flag from the current vertical offset.
    /// Called on every scroll notification; idempotent at a fixed offset.
    pub fn on_scroll(&mut self, offset: f32) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Record that the view laid out an anchor for `section`.
    pub fn register_anchor(&mut self, section: Section) {
        self.registered[section.index()] = true;
    }

    pub fn has_anchor(&self, section: Section) -> bool {
        self.registered[section.index()]
    }

    /// Explicitly select a section.
    ///
    /// Returns `true` and emits a scroll request when the section's anchor
    /// is registered; otherwise leaves all state untouched.
    pub fn select(&mut self, section: Section) -> bool {
        if !self.has_anchor(section) {
            return false;
        }
        self.active = section;
        self.scroll_request = Some(section);
        true
    }

    /// Consume the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<Section> {
        self.scroll_request.take()
    }
}

impl Default for NavCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_with_all_anchors() -> NavCoordinator {
        let mut nav = NavCoordinator::new();
        for section in Section::ALL {
            nav.register_anchor(section);
        }
        nav
    }

    #[test]
    fn starts_at_home_unscrolled() {
        let nav = NavCoordinator::new();
        assert_eq!(nav.active(), Section::Home);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn selecting_each_section_activates_it() {
        let mut nav = nav_with_all_anchors();
        for section in Section::ALL {
            assert!(nav.select(section));
            assert_eq!(nav.active(), section);
            assert_eq!(nav.take_scroll_request(), Some(section));
        }
    }

    #[test]
    fn selecting_unregistered_section_is_a_no_op() {
        let mut nav = NavCoordinator::new();
        nav.register_anchor(Section::Home);
        assert!(!nav.select(Section::Projects));
        assert_eq!(nav.active(), Section::Home);
        assert_eq!(nav.take_scroll_request(), None);
    }

    #[test]
    fn scroll_request_is_consumed_once() {
        let mut nav = nav_with_all_anchors();
        nav.select(Section::Contact);
        assert_eq!(nav.take_scroll_request(), Some(Section::Contact));
        assert_eq!(nav.take_scroll_request(), None);
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let mut nav = NavCoordinator::new();
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(50.0);
        assert!(!nav.is_scrolled(), "threshold itself does not count");
        nav.on_scroll(50.5);
        assert!(nav.is_scrolled());
        // Idempotent at a fixed offset.
        nav.on_scroll(50.5);
        assert!(nav.is_scrolled());
        nav.on_scroll(12.0);
        assert!(!nav.is_scrolled());
    }
}

//! Mobile navigation toggle.
//!
//! The open/closed state lives here and is mirrored to the panel's `open`
//! class and the icon's `aria-expanded` attribute on every change. Closing
//! an already-closed panel is a no-op, so link clicks and resize events can
//! always ask for a close without checking first.

use crate::surface::{NodeId, Surface};

pub struct NavToggle {
    panel: NodeId,
    icon: NodeId,
    breakpoint: u32,
    open: bool,
}

impl NavToggle {
    /// Bind to the panel and menu icon, starting closed. Stamps the icon's
    /// accessibility hints: it is a button controlling the main nav.
    pub fn bind(panel: NodeId, icon: NodeId, breakpoint: u32, surface: &mut impl Surface) -> Self {
        surface.set_attr(icon, "role", "button");
        surface.set_attr(icon, "aria-controls", "main-nav");
        surface.set_attr(icon, "aria-expanded", "false");
        Self {
            panel,
            icon,
            breakpoint,
            open: false,
        }
    }

    /// Menu icon activation: flip open/closed.
    pub fn toggle(&mut self, surface: &mut impl Surface) {
        self.set_open(!self.open, surface);
    }

    /// Close if open; no-op otherwise.
    pub fn close(&mut self, surface: &mut impl Surface) {
        if self.open {
            self.set_open(false, surface);
        }
    }

    /// Widening past the breakpoint force-closes the panel — the desktop
    /// layout shows the nav inline and the panel would float orphaned.
    pub fn on_resize(&mut self, width: u32, surface: &mut impl Surface) {
        if width > self.breakpoint {
            self.close(surface);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool, surface: &mut impl Surface) {
        self.open = open;
        surface.set_class(self.panel, "open", open);
        surface.set_attr(self.icon, "aria-expanded", if open { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordedPage;

    const PANEL: NodeId = NodeId(0);
    const ICON: NodeId = NodeId(1);

    fn bind(page: &mut RecordedPage) -> NavToggle {
        NavToggle::bind(PANEL, ICON, 900, page)
    }

    #[test]
    fn bind_stamps_accessibility_hints() {
        let mut page = RecordedPage::new(500);
        let nav = bind(&mut page);
        assert!(!nav.is_open());
        assert_eq!(page.attr(ICON, "role"), Some("button"));
        assert_eq!(page.attr(ICON, "aria-controls"), Some("main-nav"));
        assert_eq!(page.attr(ICON, "aria-expanded"), Some("false"));
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);

        nav.toggle(&mut page);
        assert!(nav.is_open());
        assert!(page.has_class(PANEL, "open"));
        assert_eq!(page.attr(ICON, "aria-expanded"), Some("true"));

        nav.toggle(&mut page);
        assert!(!nav.is_open());
        assert!(!page.has_class(PANEL, "open"));
        assert_eq!(page.attr(ICON, "aria-expanded"), Some("false"));
    }

    #[test]
    fn link_click_closes_open_panel() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);
        nav.toggle(&mut page);
        nav.close(&mut page);
        assert!(!nav.is_open());
        assert!(!page.has_class(PANEL, "open"));
    }

    #[test]
    fn close_when_already_closed_is_noop() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);
        nav.close(&mut page);
        assert!(!nav.is_open());
        assert_eq!(page.attr(ICON, "aria-expanded"), Some("false"));
    }

    #[test]
    fn widening_past_breakpoint_closes() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);
        nav.toggle(&mut page);

        nav.on_resize(901, &mut page);
        assert!(!nav.is_open());
        assert_eq!(page.attr(ICON, "aria-expanded"), Some("false"));
    }

    #[test]
    fn resize_at_breakpoint_keeps_panel_open() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);
        nav.toggle(&mut page);

        // Force-close only past the breakpoint, not at it.
        nav.on_resize(900, &mut page);
        assert!(nav.is_open());
    }

    #[test]
    fn resize_while_closed_is_noop() {
        let mut page = RecordedPage::new(500);
        let mut nav = bind(&mut page);
        nav.on_resize(1200, &mut page);
        assert!(!nav.is_open());
    }
}

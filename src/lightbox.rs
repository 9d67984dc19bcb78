//! Lightbox modal controller.
//!
//! The single owner of "what is currently being viewed": an ordered image
//! list and an index into it, replaced wholesale on every open. Both
//! carousel kinds (and standalone images) are producers; nothing else ever
//! writes the list.
//!
//! Closing hides the modal immediately but blanks the displayed image only
//! after a configured delay, so the closing CSS transition doesn't play
//! over an empty frame. Opening cancels a still-pending clear — otherwise a
//! quick close-then-reopen would blank the freshly shown image.

use log::debug;

use crate::config::LightboxConfig;
use crate::events::TimerEvent;
use crate::surface::{NodeId, Surface};
use crate::timer::{TimerHandle, TimerQueue};

pub struct Lightbox {
    overlay: NodeId,
    image: NodeId,
    close_control: NodeId,
    list: Vec<String>,
    index: usize,
    open: bool,
    clear_timer: Option<TimerHandle>,
}

impl Lightbox {
    /// Bind to the modal's overlay, image element, and close control,
    /// starting closed and empty.
    pub fn bind(overlay: NodeId, image: NodeId, close_control: NodeId) -> Self {
        Self {
            overlay,
            image,
            close_control,
            list: Vec::new(),
            index: 0,
            open: false,
            clear_timer: None,
        }
    }

    /// Replace the active list and show the modal. Always succeeds; an
    /// empty list shows a blank image and navigation becomes a no-op.
    /// A `start` beyond the list is clamped to the last image.
    pub fn open_with(
        &mut self,
        list: Vec<String>,
        start: usize,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
    ) {
        if let Some(pending) = self.clear_timer.take() {
            timers.cancel(pending);
        }
        debug!("lightbox open: {} images, start {start}", list.len());
        self.index = if list.is_empty() {
            0
        } else {
            start.min(list.len() - 1)
        };
        self.list = list;
        self.open = true;
        self.show_current(surface);
        surface.set_class(self.overlay, "open", true);
        surface.set_attr(self.overlay, "aria-hidden", "false");
        surface.set_scroll_lock(true);
        surface.focus(self.close_control);
    }

    /// Hide the modal and forget the list. The displayed image is blanked
    /// later, when the scheduled clear fires. Closing while closed is a
    /// no-op.
    pub fn close(
        &mut self,
        config: &LightboxConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        if !self.open {
            return;
        }
        debug!("lightbox close");
        self.open = false;
        self.list.clear();
        self.index = 0;
        surface.set_class(self.overlay, "open", false);
        surface.set_attr(self.overlay, "aria-hidden", "true");
        surface.set_scroll_lock(false);
        self.clear_timer =
            Some(timers.schedule(now_ms + config.clear_delay_ms, TimerEvent::LightboxClear));
    }

    /// Post-close clear fired: release the loaded image.
    pub fn on_clear(&mut self, surface: &mut impl Surface) {
        self.clear_timer = None;
        if !self.open {
            surface.set_image(self.image, "");
        }
    }

    pub fn prev(&mut self, surface: &mut impl Surface) {
        if self.list.is_empty() {
            return;
        }
        self.index = (self.index + self.list.len() - 1) % self.list.len();
        self.show_current(surface);
    }

    pub fn next(&mut self, surface: &mut impl Surface) {
        if self.list.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.list.len();
        self.show_current(surface);
    }

    fn show_current(&self, surface: &mut impl Surface) {
        let src = self.list.get(self.index).map(String::as_str).unwrap_or("");
        surface.set_image(self.image, src);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn list_len(&self) -> usize {
        self.list.len()
    }
}

//! Gallery carousel: multi-slide window with autoplay.
//!
//! Unlike the card carousel, several slides are visible at once, so the
//! valid index range is `[0, len - visible_count]` and depends on the
//! viewport. Stepping below zero wraps to that maximum; stepping past the
//! maximum wraps to zero. The track is positioned by a pixel offset of
//! `-(index × slide_width)` where `slide_width` is measured live from the
//! first slide, so responsive CSS sizing needs no width table here.
//!
//! ## Playback state machine
//!
//! ```text
//!            tick fires: advance, reschedule
//!              ┌─────────┐
//!              ▼         │
//!          ┌────────────────┐   manual prev/next or slide click
//!          │ Playing {tick} │ ──────────────────────────────────┐
//!          └────────────────┘                                   ▼
//!                  ▲                                  ┌─────────────────┐
//!                  │  resume timer fires              │ Paused {resume} │
//!                  └──────────────────────────────────└─────────────────┘
//! ```
//!
//! Exactly one timer handle is live at any moment: the pending tick while
//! playing, or the pending resume while paused. Every manual interaction
//! cancels that handle before scheduling its replacement, so two rapid
//! clicks can never leave two timers driving the same carousel. Resizing
//! re-clamps the index and repositions but never touches playback.

use log::debug;

use crate::config::GalleryConfig;
use crate::events::TimerEvent;
use crate::surface::{NodeId, Surface};
use crate::timer::{TimerHandle, TimerQueue};

/// Autoplay state; the variant payload is the one live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing { tick: TimerHandle },
    Paused { resume: TimerHandle },
}

struct Slide {
    node: NodeId,
    src: String,
}

pub struct GalleryCarousel {
    /// Position of this carousel in the page manifest; stamped into the
    /// timer events it schedules so fired timers route back here.
    slot: usize,
    track: NodeId,
    slides: Vec<Slide>,
    index: usize,
    viewport_width: u32,
    /// `None` only for a slide-less carousel, which never schedules
    /// anything and stays inert forever.
    playback: Option<Playback>,
}

impl GalleryCarousel {
    /// Bind to a track and its slides, position at index 0, and start
    /// autoplay. A carousel with no slides binds inert: no timers, ever,
    /// so a drained queue really means the page is quiet.
    pub fn bind(
        slot: usize,
        track: NodeId,
        slides: Vec<(NodeId, String)>,
        config: &GalleryConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) -> Self {
        let playback = if slides.is_empty() {
            None
        } else {
            let tick = timers.schedule(
                now_ms + config.autoplay_ms,
                TimerEvent::GalleryTick { carousel: slot },
            );
            Some(Playback::Playing { tick })
        };
        let carousel = Self {
            slot,
            track,
            slides: slides
                .into_iter()
                .map(|(node, src)| Slide { node, src })
                .collect(),
            index: 0,
            viewport_width: surface.viewport_width(),
            playback,
        };
        carousel.reposition(surface);
        carousel
    }

    /// Upper bound of the valid index range for the current viewport.
    fn max_index(&self, config: &GalleryConfig) -> usize {
        self.slides
            .len()
            .saturating_sub(config.visible_count(self.viewport_width))
    }

    /// Wrap-around clamp: below the range lands on the max, above it lands
    /// on zero. Not plain modulo — the upper bound moves with the viewport.
    fn wrap_step(&self, delta: i64, config: &GalleryConfig) -> usize {
        let max = self.max_index(config) as i64;
        let stepped = self.index as i64 + delta;
        if stepped < 0 {
            max as usize
        } else if stepped > max {
            0
        } else {
            stepped as usize
        }
    }

    /// Translate the track to show the current window. Width is measured
    /// from the first slide only; heterogeneous slide widths would drift
    /// (kept identical to the shipped theme, which sizes all slides alike).
    fn reposition(&self, surface: &mut impl Surface) {
        let Some(first) = self.slides.first() else {
            return;
        };
        let slide_width = surface.measured_width(first.node);
        surface.set_offset_x(self.track, -(self.index as f64 * slide_width));
    }

    /// Drop the one live timer, whichever state holds it.
    fn cancel_active_timer(&self, timers: &mut TimerQueue<TimerEvent>) {
        match self.playback {
            Some(Playback::Playing { tick }) => timers.cancel(tick),
            Some(Playback::Paused { resume }) => timers.cancel(resume),
            None => false,
        };
    }

    fn pause_for(
        &mut self,
        pause_ms: u64,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        self.cancel_active_timer(timers);
        let resume = timers.schedule(
            now_ms + pause_ms,
            TimerEvent::GalleryResume { carousel: self.slot },
        );
        self.playback = Some(Playback::Paused { resume });
    }

    /// Manual prev (`delta = -1`) or next (`delta = 1`): step, reposition,
    /// and suspend autoplay for the configured window.
    pub fn step(
        &mut self,
        delta: i64,
        config: &GalleryConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        if self.slides.is_empty() {
            return;
        }
        self.index = self.wrap_step(delta, config);
        self.reposition(surface);
        self.pause_for(config.manual_pause_ms(), timers, now_ms);
    }

    /// A slide's image was clicked: suspend autoplay for the fixed
    /// slide-click window and hand back the list the lightbox should open
    /// with.
    pub fn slide_clicked(
        &mut self,
        slide: usize,
        config: &GalleryConfig,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) -> Option<(Vec<String>, usize)> {
        if slide >= self.slides.len() {
            return None;
        }
        self.pause_for(config.slide_click_pause_ms, timers, now_ms);
        Some((self.sources(), slide))
    }

    /// Autoplay tick fired: advance one step and schedule the next tick.
    pub fn on_tick(
        &mut self,
        config: &GalleryConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        // A tick delivered while paused is stale (its handle was cancelled
        // in the same dispatch batch); ignore it.
        if !matches!(self.playback, Some(Playback::Playing { .. })) {
            return;
        }
        self.index = self.wrap_step(1, config);
        self.reposition(surface);
        let tick = timers.schedule(
            now_ms + config.autoplay_ms,
            TimerEvent::GalleryTick { carousel: self.slot },
        );
        self.playback = Some(Playback::Playing { tick });
    }

    /// Pause window elapsed: back to playing.
    pub fn on_resume(
        &mut self,
        config: &GalleryConfig,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        if self.playback.is_none() {
            return;
        }
        debug!("gallery {}: autoplay resumes", self.slot);
        let tick = timers.schedule(
            now_ms + config.autoplay_ms,
            TimerEvent::GalleryTick { carousel: self.slot },
        );
        self.playback = Some(Playback::Playing { tick });
    }

    /// Viewport changed: re-clamp the index into the new valid range and
    /// reposition. Playback is untouched.
    pub fn on_resize(&mut self, width: u32, config: &GalleryConfig, surface: &mut impl Surface) {
        self.viewport_width = width;
        self.index = self.index.min(self.max_index(config));
        self.reposition(surface);
    }

    /// Page load: first real measurement is available, reposition.
    pub fn on_load(&self, surface: &mut impl Surface) {
        self.reposition(surface);
    }

    /// Ordered image sources, as handed to the lightbox.
    pub fn sources(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.src.clone()).collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn playback(&self) -> Option<Playback> {
        self.playback
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

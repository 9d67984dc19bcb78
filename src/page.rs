//! Page binding and event routing.
//!
//! [`Page::bind`] turns a [`PageManifest`] into live components, allocating
//! a [`NodeId`] for every element the layer will mutate or measure and
//! publishing them in [`Bindings`] so the host adapter can wire ids to real
//! elements. After binding, the host delivers [`Event`]s through
//! [`Page::handle`] and drives virtual time through [`Page::advance`];
//! everything else happens in here.
//!
//! ## Defensive absence
//!
//! Missing features never error. A manifest without a nav panel, carousels,
//! or a contact form simply binds without them, and their events fall
//! through silently. The lightbox is the exception: the whole layer exists
//! to feed it, so a manifest without one yields `None` and the page stays
//! inert — matching a site whose modal markup was stripped.
//!
//! ## Ordering
//!
//! `handle` first fires every timer due at the event's instant, then
//! dispatches the event, so "cancel outstanding timers before scheduling
//! new ones" observes a consistent queue. Within one call, state mutation
//! and its surface reflection complete before control returns.

use log::debug;

use crate::card::CardCarousel;
use crate::config::BehaviorConfig;
use crate::contact::ContactForm;
use crate::events::{Event, Key, TimerEvent};
use crate::gallery::GalleryCarousel;
use crate::lightbox::Lightbox;
use crate::nav::NavToggle;
use crate::surface::{NodeId, Surface};
use crate::timer::TimerQueue;
use crate::types::PageManifest;

/// Node ids for the nav panel and menu icon.
#[derive(Debug, Clone)]
pub struct NavBindings {
    pub panel: NodeId,
    pub icon: NodeId,
}

/// Node ids for one card carousel: its slide images, in order.
#[derive(Debug, Clone)]
pub struct CardBindings {
    pub slides: Vec<NodeId>,
}

/// Node ids for one gallery carousel: the translated track and the slide
/// wrappers (the first one is measured for positioning).
#[derive(Debug, Clone)]
pub struct GalleryBindings {
    pub track: NodeId,
    pub slides: Vec<NodeId>,
}

/// Node ids for the lightbox modal.
#[derive(Debug, Clone)]
pub struct LightboxBindings {
    pub overlay: NodeId,
    pub image: NodeId,
    pub close: NodeId,
}

/// Node ids for the contact form and its status message element.
#[derive(Debug, Clone)]
pub struct ContactBindings {
    pub form: NodeId,
    pub status: NodeId,
}

/// Every node id the page allocated, in manifest order. The host adapter
/// walks this next to its own element references to build the id → element
/// map.
#[derive(Debug, Clone)]
pub struct Bindings {
    pub nav: Option<NavBindings>,
    pub card_carousels: Vec<CardBindings>,
    pub standalone_images: Vec<NodeId>,
    pub gallery_carousels: Vec<GalleryBindings>,
    pub lightbox: LightboxBindings,
    pub contact: Option<ContactBindings>,
}

struct IdAlloc(u32);

impl IdAlloc {
    fn next(&mut self) -> NodeId {
        let id = NodeId(self.0);
        self.0 += 1;
        id
    }
}

/// One page's interaction layer: all components, their shared timer queue,
/// and the config they run under.
pub struct Page {
    config: BehaviorConfig,
    timers: TimerQueue<TimerEvent>,
    bindings: Bindings,
    nav: Option<NavToggle>,
    cards: Vec<CardCarousel>,
    standalone: Vec<String>,
    galleries: Vec<GalleryCarousel>,
    lightbox: Lightbox,
    contact: Option<ContactForm>,
}

impl Page {
    /// Bind the manifest's features, starting at virtual instant `now_ms`.
    ///
    /// Returns `None` when the manifest carries no lightbox — without the
    /// modal there is nowhere to send any image, so the whole layer stays
    /// inert.
    pub fn bind(
        manifest: &PageManifest,
        config: BehaviorConfig,
        surface: &mut impl Surface,
        now_ms: u64,
    ) -> Option<Self> {
        if !manifest.lightbox {
            debug!("page: no lightbox in manifest, behavior layer stays inert");
            return None;
        }

        let mut ids = IdAlloc(0);
        let mut timers = TimerQueue::new();

        let lightbox_bindings = LightboxBindings {
            overlay: ids.next(),
            image: ids.next(),
            close: ids.next(),
        };
        let lightbox = Lightbox::bind(
            lightbox_bindings.overlay,
            lightbox_bindings.image,
            lightbox_bindings.close,
        );

        let (nav_bindings, nav) = if manifest.nav {
            let b = NavBindings {
                panel: ids.next(),
                icon: ids.next(),
            };
            let toggle = NavToggle::bind(b.panel, b.icon, config.nav.breakpoint, surface);
            (Some(b), Some(toggle))
        } else {
            (None, None)
        };

        let mut card_bindings = Vec::with_capacity(manifest.card_carousels.len());
        let mut cards = Vec::with_capacity(manifest.card_carousels.len());
        for carousel in &manifest.card_carousels {
            let slides: Vec<NodeId> = carousel.images.iter().map(|_| ids.next()).collect();
            let bound = slides
                .iter()
                .zip(&carousel.images)
                .map(|(&node, src)| (node, src.clone()))
                .collect();
            cards.push(CardCarousel::bind(bound, surface));
            card_bindings.push(CardBindings { slides });
        }

        let standalone_bindings: Vec<NodeId> =
            manifest.standalone_images.iter().map(|_| ids.next()).collect();
        let standalone = manifest.standalone_images.clone();

        let mut gallery_bindings = Vec::with_capacity(manifest.gallery_carousels.len());
        let mut galleries = Vec::with_capacity(manifest.gallery_carousels.len());
        for (slot, carousel) in manifest.gallery_carousels.iter().enumerate() {
            let track = ids.next();
            let slides: Vec<NodeId> = carousel.images.iter().map(|_| ids.next()).collect();
            let bound = slides
                .iter()
                .zip(&carousel.images)
                .map(|(&node, src)| (node, src.clone()))
                .collect();
            galleries.push(GalleryCarousel::bind(
                slot,
                track,
                bound,
                &config.gallery,
                surface,
                &mut timers,
                now_ms,
            ));
            gallery_bindings.push(GalleryBindings { track, slides });
        }

        let (contact_bindings, contact) = if manifest.contact_form {
            let b = ContactBindings {
                form: ids.next(),
                status: ids.next(),
            };
            let form = ContactForm::bind(b.form, b.status);
            (Some(b), Some(form))
        } else {
            (None, None)
        };

        debug!(
            "page: bound {} card carousel(s), {} gallery carousel(s), {} standalone image(s)",
            cards.len(),
            galleries.len(),
            standalone.len()
        );

        Some(Self {
            config,
            timers,
            bindings: Bindings {
                nav: nav_bindings,
                card_carousels: card_bindings,
                standalone_images: standalone_bindings,
                gallery_carousels: gallery_bindings,
                lightbox: lightbox_bindings,
                contact: contact_bindings,
            },
            nav,
            cards,
            standalone,
            galleries,
            lightbox,
            contact,
        })
    }

    /// Fire every timer due at `now_ms`, in deadline order.
    pub fn advance(&mut self, now_ms: u64, surface: &mut impl Surface) {
        for fired in self.timers.drain_due(now_ms) {
            self.dispatch_timer(fired, now_ms, surface);
        }
    }

    /// Deliver one event at virtual instant `now_ms`. Due timers fire
    /// first.
    pub fn handle(&mut self, event: Event, now_ms: u64, surface: &mut impl Surface) {
        self.advance(now_ms, surface);
        match event {
            Event::MenuIconClick => {
                if let Some(nav) = &mut self.nav {
                    nav.toggle(surface);
                }
            }
            Event::NavLinkClick => {
                if let Some(nav) = &mut self.nav {
                    nav.close(surface);
                }
            }
            Event::CardPrev { carousel } => {
                if let Some(card) = self.cards.get_mut(carousel) {
                    card.prev(surface);
                }
            }
            Event::CardNext { carousel } => {
                if let Some(card) = self.cards.get_mut(carousel) {
                    card.next(surface);
                }
            }
            Event::CardSlideClick { carousel, slide } => {
                let opened = self
                    .cards
                    .get(carousel)
                    .and_then(|card| card.slide_clicked(slide));
                if let Some((list, start)) = opened {
                    self.lightbox.open_with(list, start, surface, &mut self.timers);
                }
            }
            Event::StandaloneImageClick { image } => {
                if let Some(src) = self.standalone.get(image) {
                    let list = vec![src.clone()];
                    self.lightbox.open_with(list, 0, surface, &mut self.timers);
                }
            }
            Event::GalleryPrev { carousel } => {
                if let Some(gallery) = self.galleries.get_mut(carousel) {
                    gallery.step(-1, &self.config.gallery, surface, &mut self.timers, now_ms);
                }
            }
            Event::GalleryNext { carousel } => {
                if let Some(gallery) = self.galleries.get_mut(carousel) {
                    gallery.step(1, &self.config.gallery, surface, &mut self.timers, now_ms);
                }
            }
            Event::GallerySlideClick { carousel, slide } => {
                let opened = self.galleries.get_mut(carousel).and_then(|gallery| {
                    gallery.slide_clicked(slide, &self.config.gallery, &mut self.timers, now_ms)
                });
                if let Some((list, start)) = opened {
                    self.lightbox.open_with(list, start, surface, &mut self.timers);
                }
            }
            Event::LightboxClose | Event::LightboxBackdropClick => {
                self.lightbox
                    .close(&self.config.lightbox, surface, &mut self.timers, now_ms);
            }
            Event::LightboxPrev => self.lightbox.prev(surface),
            Event::LightboxNext => self.lightbox.next(surface),
            Event::Key(key) => self.handle_key(key, now_ms, surface),
            Event::Resize { width } => {
                if let Some(nav) = &mut self.nav {
                    nav.on_resize(width, surface);
                }
                for gallery in &mut self.galleries {
                    gallery.on_resize(width, &self.config.gallery, surface);
                }
            }
            Event::Load => {
                for gallery in &self.galleries {
                    gallery.on_load(surface);
                }
            }
            Event::ContactSubmit {
                name,
                email,
                message,
            } => {
                if let Some(contact) = &mut self.contact {
                    contact.submit(
                        &name,
                        &email,
                        &message,
                        &self.config.contact,
                        surface,
                        &mut self.timers,
                        now_ms,
                    );
                }
            }
        }
    }

    /// Keyboard is lightbox-only, and only while the modal is open.
    fn handle_key(&mut self, key: Key, now_ms: u64, surface: &mut impl Surface) {
        if !self.lightbox.is_open() {
            return;
        }
        match key {
            Key::Escape => {
                self.lightbox
                    .close(&self.config.lightbox, surface, &mut self.timers, now_ms)
            }
            Key::ArrowLeft => self.lightbox.prev(surface),
            Key::ArrowRight => self.lightbox.next(surface),
        }
    }

    fn dispatch_timer(&mut self, fired: TimerEvent, now_ms: u64, surface: &mut impl Surface) {
        match fired {
            TimerEvent::GalleryTick { carousel } => {
                if let Some(gallery) = self.galleries.get_mut(carousel) {
                    gallery.on_tick(&self.config.gallery, surface, &mut self.timers, now_ms);
                }
            }
            TimerEvent::GalleryResume { carousel } => {
                if let Some(gallery) = self.galleries.get_mut(carousel) {
                    gallery.on_resume(&self.config.gallery, &mut self.timers, now_ms);
                }
            }
            TimerEvent::LightboxClear => self.lightbox.on_clear(surface),
            TimerEvent::ContactSendDone => {
                if let Some(contact) = &mut self.contact {
                    contact.on_send_done(&self.config.contact, surface, &mut self.timers, now_ms);
                }
            }
            TimerEvent::ContactHideStatus => {
                if let Some(contact) = &mut self.contact {
                    contact.on_hide(surface);
                }
            }
        }
    }

    /// Node ids allocated at bind, for the host's id → element map.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn card_carousels(&self) -> &[CardCarousel] {
        &self.cards
    }

    pub fn gallery_carousels(&self) -> &[GalleryCarousel] {
        &self.galleries
    }

    pub fn nav_open(&self) -> bool {
        self.nav.as_ref().is_some_and(NavToggle::is_open)
    }

    /// Timers still pending — useful to hosts deciding how long to keep
    /// driving time after the last input.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordedPage;
    use crate::types::CarouselManifest;

    fn manifest() -> PageManifest {
        PageManifest {
            nav: true,
            card_carousels: vec![CarouselManifest {
                images: vec!["c0.avif".into(), "c1.avif".into()],
            }],
            standalone_images: vec!["solo.avif".into()],
            gallery_carousels: vec![CarouselManifest {
                images: (0..5).map(|i| format!("g{i}.avif")).collect(),
            }],
            lightbox: true,
            contact_form: true,
        }
    }

    #[test]
    fn bind_without_lightbox_returns_none() {
        let mut surface = RecordedPage::new(1000);
        let m = PageManifest {
            lightbox: false,
            ..manifest()
        };
        assert!(Page::bind(&m, BehaviorConfig::default(), &mut surface, 0).is_none());
    }

    #[test]
    fn bind_allocates_distinct_ids_for_everything() {
        let mut surface = RecordedPage::new(1000);
        let page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        let b = page.bindings();

        let mut all = vec![b.lightbox.overlay, b.lightbox.image, b.lightbox.close];
        let nav = b.nav.as_ref().unwrap();
        all.extend([nav.panel, nav.icon]);
        all.extend(b.card_carousels[0].slides.iter().copied());
        all.extend(b.standalone_images.iter().copied());
        all.push(b.gallery_carousels[0].track);
        all.extend(b.gallery_carousels[0].slides.iter().copied());
        let contact = b.contact.as_ref().unwrap();
        all.extend([contact.form, contact.status]);

        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
    }

    #[test]
    fn absent_features_swallow_their_events() {
        let mut surface = RecordedPage::new(1000);
        let m = PageManifest {
            lightbox: true,
            ..PageManifest::default()
        };
        let mut page = Page::bind(&m, BehaviorConfig::default(), &mut surface, 0).unwrap();

        // None of these have a target; all must be silent no-ops.
        page.handle(Event::MenuIconClick, 0, &mut surface);
        page.handle(Event::CardNext { carousel: 0 }, 0, &mut surface);
        page.handle(Event::GalleryNext { carousel: 3 }, 0, &mut surface);
        page.handle(Event::StandaloneImageClick { image: 9 }, 0, &mut surface);
        page.handle(
            Event::ContactSubmit {
                name: "A".into(),
                email: "a@b.c".into(),
                message: "hi".into(),
            },
            0,
            &mut surface,
        );
        assert!(!page.lightbox().is_open());
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn slideless_gallery_schedules_no_timers() {
        let mut surface = RecordedPage::new(1000);
        let m = PageManifest {
            gallery_carousels: vec![CarouselManifest { images: vec![] }],
            lightbox: true,
            ..PageManifest::default()
        };
        let mut page = Page::bind(&m, BehaviorConfig::default(), &mut surface, 0).unwrap();
        assert_eq!(page.pending_timers(), 0);

        // Stepping it is a silent no-op, and still arms nothing.
        page.handle(Event::GalleryNext { carousel: 0 }, 10, &mut surface);
        assert_eq!(page.gallery_carousels()[0].index(), 0);
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn card_slide_click_routes_into_lightbox() {
        let mut surface = RecordedPage::new(1000);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        let image_node = page.bindings().lightbox.image;

        page.handle(Event::CardSlideClick { carousel: 0, slide: 1 }, 10, &mut surface);
        assert!(page.lightbox().is_open());
        assert_eq!(surface.image_src(image_node), Some("c1.avif"));
    }

    #[test]
    fn standalone_click_opens_single_image_list() {
        let mut surface = RecordedPage::new(1000);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        let image_node = page.bindings().lightbox.image;

        page.handle(Event::StandaloneImageClick { image: 0 }, 10, &mut surface);
        assert!(page.lightbox().is_open());
        assert_eq!(page.lightbox().list_len(), 1);
        assert_eq!(surface.image_src(image_node), Some("solo.avif"));

        // Wraparound on a single image stays put.
        page.handle(Event::LightboxNext, 20, &mut surface);
        assert_eq!(surface.image_src(image_node), Some("solo.avif"));
    }

    #[test]
    fn keyboard_ignored_while_lightbox_closed() {
        let mut surface = RecordedPage::new(1000);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        page.handle(Event::Key(Key::ArrowRight), 0, &mut surface);
        page.handle(Event::Key(Key::Escape), 0, &mut surface);
        assert!(!page.lightbox().is_open());
    }

    #[test]
    fn escape_closes_open_lightbox() {
        let mut surface = RecordedPage::new(1000);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        page.handle(Event::CardSlideClick { carousel: 0, slide: 0 }, 0, &mut surface);
        page.handle(Event::Key(Key::Escape), 10, &mut surface);
        assert!(!page.lightbox().is_open());
        assert!(!surface.scroll_locked);
    }

    #[test]
    fn handle_fires_due_timers_before_the_event() {
        let mut surface = RecordedPage::new(1000);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        let track = page.bindings().gallery_carousels[0].track;

        // Deliver an unrelated event at t=3000; the autoplay tick due then
        // must fire first and advance the gallery.
        page.handle(Event::NavLinkClick, 3000, &mut surface);
        assert_eq!(page.gallery_carousels()[0].index(), 1);
        assert!(surface.offset_x(track) < 0.0);
    }

    #[test]
    fn resize_routes_to_nav_and_galleries() {
        let mut surface = RecordedPage::new(500);
        let mut page = Page::bind(&manifest(), BehaviorConfig::default(), &mut surface, 0).unwrap();
        page.handle(Event::MenuIconClick, 0, &mut surface);
        assert!(page.nav_open());

        surface.set_viewport_width(1000);
        page.handle(Event::Resize { width: 1000 }, 10, &mut surface);
        assert!(!page.nav_open());
        assert_eq!(page.gallery_carousels()[0].index(), 0);
    }
}

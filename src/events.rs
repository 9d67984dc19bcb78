//! Input and timer event vocabulary.
//!
//! [`Event`] is what the host adapter delivers: it has already resolved the
//! raw click/keydown to the interactive element it landed on, so events name
//! components by their manifest position. [`TimerEvent`] is internal — it is
//! the payload of the [`crate::timer::TimerQueue`] the page owns, routed back
//! to the component that scheduled it.

/// A discrete user or environment event, as resolved by the host adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The menu icon was activated.
    MenuIconClick,
    /// Any link inside the navigation panel was activated.
    NavLinkClick,
    /// Prev control of the card carousel at `carousel`.
    CardPrev { carousel: usize },
    /// Next control of the card carousel at `carousel`.
    CardNext { carousel: usize },
    /// A slide of a card carousel was clicked; opens the lightbox.
    CardSlideClick { carousel: usize, slide: usize },
    /// A standalone (non-carousel) image was clicked.
    StandaloneImageClick { image: usize },
    /// Prev control of the gallery carousel at `carousel`.
    GalleryPrev { carousel: usize },
    /// Next control of the gallery carousel at `carousel`.
    GalleryNext { carousel: usize },
    /// A gallery slide's image was clicked; opens the lightbox and pauses
    /// autoplay.
    GallerySlideClick { carousel: usize, slide: usize },
    /// The lightbox close control was activated.
    LightboxClose,
    /// The lightbox prev control was activated.
    LightboxPrev,
    /// The lightbox next control was activated.
    LightboxNext,
    /// A pointer click landed on the lightbox backdrop itself, not on its
    /// content. The adapter performs that target check.
    LightboxBackdropClick,
    /// A key the layer reacts to was pressed.
    Key(Key),
    /// The viewport was resized to `width` logical pixels.
    Resize { width: u32 },
    /// The page finished loading; triggers the initial gallery layout
    /// measurement.
    Load,
    /// The contact form was submitted with these raw field values.
    ContactSubmit {
        name: String,
        email: String,
        message: String,
    },
}

/// The only keys the layer reacts to. Everything else never becomes an
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Internal timer payloads. Components schedule these against the page's
/// timer queue; [`crate::page::Page::advance`] routes fired ones back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Autoplay advance for the gallery carousel at `carousel`.
    GalleryTick { carousel: usize },
    /// End of a post-interaction pause; autoplay resumes.
    GalleryResume { carousel: usize },
    /// Post-close delay elapsed; blank the lightbox image source.
    LightboxClear,
    /// Simulated send finished; show the success message.
    ContactSendDone,
    /// Status message visibility window elapsed; hide it.
    ContactHideStatus,
}

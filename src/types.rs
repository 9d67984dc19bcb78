//! Behavior-manifest types.
//!
//! A generator (or a hand-written JSON file) describes the interactive
//! structure of one page: which features exist and, for the carousels, the
//! ordered image lists they step through. [`crate::page::Page::bind`]
//! consumes this description; the host adapter keeps the corresponding real
//! elements and maps them to the node ids `bind` allocates.
//!
//! The manifest is sparse — every field defaults to "absent" so a page with
//! only a gallery serializes to just that gallery. Absent features bind to
//! nothing, silently (see the crate docs on defensive absence).

use serde::{Deserialize, Serialize};

/// An ordered run of slide image sources — used for both carousel kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselManifest {
    pub images: Vec<String>,
}

/// Interactive structure of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageManifest {
    /// Whether the page has the mobile navigation panel and its menu icon.
    pub nav: bool,
    /// One-slide-at-a-time steppers embedded in content cards.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub card_carousels: Vec<CarouselManifest>,
    /// Sources of plain clickable images outside any carousel; each opens
    /// the lightbox with a single-element list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub standalone_images: Vec<String>,
    /// Multi-slide-visible autoplay carousels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery_carousels: Vec<CarouselManifest>,
    /// Whether the page carries the lightbox modal (overlay, image, close
    /// and prev/next controls). Without it the whole layer stays inert.
    pub lightbox: bool,
    /// Whether the page carries the contact form and its status node.
    pub contact_form: bool,
}

impl PageManifest {
    /// Parse a manifest from the JSON a generator emits alongside the page
    /// (conventionally `behaviors.json`).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

//! The UI surface boundary.
//!
//! Components never touch a real DOM. They describe every mutation — class
//! toggles, ARIA attributes, image sources, the carousel track's horizontal
//! offset, the body scroll lock — through the [`Surface`] trait, and read the
//! two live measurements they need (viewport width, rendered slide width)
//! through the same trait. A browser adapter forwards these calls to actual
//! elements; [`RecordedPage`] keeps them in memory so behavior is fully
//! testable without a rendered page.
//!
//! Nodes are addressed by [`NodeId`], an opaque handle allocated by
//! [`crate::page::Page::bind`] and published in its bindings table. The
//! adapter owns the id → element mapping; this crate only guarantees it
//! mutates the ids it allocated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Opaque handle to a host page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Everything the behavior layer does to, or asks of, the host page.
///
/// Mutations must apply synchronously from the caller's point of view:
/// components rely on state and its visual reflection changing together
/// within one event dispatch.
pub trait Surface {
    /// Add or remove a CSS class on a node.
    fn set_class(&mut self, node: NodeId, class: &str, on: bool);

    /// Set an attribute (used for the ARIA contract).
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);

    /// Set an image element's `src`. An empty `src` releases the loaded
    /// image. The host adapter also blanks `alt` so a stale description
    /// never outlives its image.
    fn set_image(&mut self, node: NodeId, src: &str);

    /// Set a node's horizontal translation in pixels (carousel tracks).
    fn set_offset_x(&mut self, node: NodeId, px: f64);

    /// Replace a node's text content (status messages).
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Set a node's text color (status message severity).
    fn set_color(&mut self, node: NodeId, color: &str);

    /// Show or hide a node (the `hidden` attribute).
    fn set_hidden(&mut self, node: NodeId, hidden: bool);

    /// Lock or unlock page scrolling (class on the document body).
    fn set_scroll_lock(&mut self, locked: bool);

    /// Move input focus to a node.
    fn focus(&mut self, node: NodeId);

    /// Reset a form's fields to their initial values.
    fn reset_form(&mut self, node: NodeId);

    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> u32;

    /// Live rendered width of a node in pixels. Gallery tracks are
    /// positioned from the first slide's measured width, so responsive
    /// CSS sizing needs no breakpoint table here.
    fn measured_width(&self, node: NodeId) -> f64;
}

/// Recorded state of one node on a [`RecordedPage`].
#[derive(Debug, Clone, Default)]
pub struct NodeState {
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub image: Option<String>,
    pub offset_x: Option<f64>,
    pub text: Option<String>,
    pub color: Option<String>,
    pub hidden: Option<bool>,
}

/// In-memory [`Surface`] implementation.
///
/// This is both the test harness and the reference for adapter authors:
/// every mutation is stored verbatim and can be queried back. Measurements
/// are configurable — tests set the viewport width and per-node rendered
/// widths instead of laying anything out.
#[derive(Debug)]
pub struct RecordedPage {
    nodes: BTreeMap<NodeId, NodeState>,
    viewport_width: u32,
    default_width: f64,
    widths: BTreeMap<NodeId, f64>,
    pub scroll_locked: bool,
    pub focused: Option<NodeId>,
    pub form_resets: Vec<NodeId>,
}

impl RecordedPage {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            nodes: BTreeMap::new(),
            viewport_width,
            default_width: 300.0,
            widths: BTreeMap::new(),
            scroll_locked: false,
            focused: None,
            form_resets: Vec::new(),
        }
    }

    /// Simulate a viewport resize. The caller still has to deliver the
    /// matching `Resize` event; this only changes what `viewport_width()`
    /// reports.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Override the rendered width reported for one node.
    pub fn set_measured_width(&mut self, node: NodeId, width: f64) {
        self.widths.insert(node, width);
    }

    fn node(&mut self, id: NodeId) -> &mut NodeState {
        self.nodes.entry(id).or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.contains(class))
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|n| n.attrs.get(name))
            .map(String::as_str)
    }

    pub fn image_src(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.image.as_deref())
    }

    pub fn offset_x(&self, node: NodeId) -> f64 {
        self.nodes
            .get(&node)
            .and_then(|n| n.offset_x)
            .unwrap_or(0.0)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|n| n.text.as_deref())
    }

    pub fn color(&self, node: NodeId) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|n| n.color.as_deref())
    }

    /// Hidden state; nodes never touched report `false`.
    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .and_then(|n| n.hidden)
            .unwrap_or(false)
    }
}

impl Surface for RecordedPage {
    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        let n = self.node(node);
        if on {
            n.classes.insert(class.to_string());
        } else {
            n.classes.remove(class);
        }
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.node(node).attrs.insert(name.to_string(), value.to_string());
    }

    fn set_image(&mut self, node: NodeId, src: &str) {
        self.node(node).image = Some(src.to_string());
    }

    fn set_offset_x(&mut self, node: NodeId, px: f64) {
        self.node(node).offset_x = Some(px);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.node(node).text = Some(text.to_string());
    }

    fn set_color(&mut self, node: NodeId, color: &str) {
        self.node(node).color = Some(color.to_string());
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        self.node(node).hidden = Some(hidden);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn reset_form(&mut self, node: NodeId) {
        self.form_resets.push(node);
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn measured_width(&self, node: NodeId) -> f64 {
        self.widths.get(&node).copied().unwrap_or(self.default_width)
    }
}

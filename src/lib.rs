//! # Viewfinder
//!
//! Headless interaction layer for static photo-gallery sites. The published
//! page stays plain HTML and CSS; everything that *moves* — the mobile nav
//! toggle, per-card image steppers, the autoplaying gallery carousel, the
//! shared lightbox modal, the simulated contact form — is modeled here as
//! deterministic state machines with no DOM, no real timers, and no
//! rendering.
//!
//! # Architecture: Manifest → Components → Surface
//!
//! ```text
//! behaviors.json ──bind──▶ Page { nav, carousels, lightbox, contact }
//!                              │                        ▲
//!                   mutations  ▼                        │ events + virtual time
//!                        trait Surface ◀───────── host adapter
//! ```
//!
//! A host adapter (browser/wasm glue, a prerenderer, or a test harness)
//! feeds [`page::Page::bind`] a [`types::PageManifest`] describing which
//! interactive features the page has, then delivers resolved input events
//! and a monotone millisecond clock. Components answer exclusively through
//! the [`surface::Surface`] trait: class toggles, ARIA attributes, image
//! sources, pixel offsets, the scroll lock. This separation exists for
//! three reasons:
//!
//! - **Testability**: every behavior, including timer-driven ones, runs
//!   against [`surface::RecordedPage`] under a virtual clock — no browser,
//!   no sleeping, no flaky waits.
//! - **Determinism**: all "waiting" is an entry in one [`timer::TimerQueue`];
//!   firing order is defined and cancellation is explicit, so interleavings
//!   that are timing-dependent in a browser are reproducible here.
//! - **Portability**: the adapter owns the element references; the layer
//!   only ever speaks node ids it allocated itself.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `behaviors.toml` loading: timings, breakpoints, message colors |
//! | [`types`] | Behavior-manifest types consumed by `Page::bind` |
//! | [`surface`] | The `Surface` trait and the in-memory `RecordedPage` |
//! | [`timer`] | Virtual-time single-shot timer queue |
//! | [`events`] | Input and timer event vocabulary |
//! | [`nav`] | Mobile navigation toggle |
//! | [`card`] | One-slide-at-a-time card carousel |
//! | [`gallery`] | Multi-slide gallery carousel with autoplay state machine |
//! | [`lightbox`] | Modal image viewer; sole owner of the active image list |
//! | [`page`] | Binding, event routing, timer dispatch |
//!
//! # Design Decisions
//!
//! ## One owner for the viewed image
//!
//! Both carousel kinds produce image lists; only the [`lightbox`] consumes
//! them. Opening replaces the previous list wholesale — there is no merge
//! and no second writer, so "what is currently shown" has exactly one
//! mutable home.
//!
//! ## Autoplay as an explicit state machine
//!
//! The gallery carousel is either `Playing` with a pending tick or `Paused`
//! with a pending resume, and the variant carries the live timer handle.
//! Cancellation is one operation on one handle rather than bookkeeping over
//! implicit timer ids, which is what makes "no duplicate timers after rapid
//! clicks" an invariant instead of a hope.
//!
//! ## Defensive absence over errors
//!
//! A page missing a feature's markup simply doesn't get that feature; no
//! error surfaces anywhere. The only user-visible "failure" in the whole
//! layer is the contact form's validation message. See [`page`] for the one
//! exception (a manifest without a lightbox binds to nothing at all).

pub mod card;
pub mod config;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod lightbox;
pub mod nav;
pub mod page;
pub mod surface;
pub mod timer;
pub mod types;

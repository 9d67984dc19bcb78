//! Card carousel: one visible slide, manual stepping.
//!
//! Each content card can embed a small sequential stepper. Exactly one
//! slide carries the `active` class at any time; prev/next wrap with plain
//! modulo arithmetic. The carousel holds no timers — it only steps when
//! asked — and its single outgoing edge is [`CardCarousel::slide_clicked`],
//! which hands the full ordered source list to the lightbox.

use crate::surface::{NodeId, Surface};

struct Slide {
    node: NodeId,
    src: String,
}

pub struct CardCarousel {
    slides: Vec<Slide>,
    index: usize,
}

impl CardCarousel {
    /// Bind to the card's slides and activate the first one.
    pub fn bind(slides: Vec<(NodeId, String)>, surface: &mut impl Surface) -> Self {
        let mut carousel = Self {
            slides: slides
                .into_iter()
                .map(|(node, src)| Slide { node, src })
                .collect(),
            index: 0,
        };
        carousel.show(0, surface);
        carousel
    }

    /// The sole mutator: mark slide `i` active and every other slide
    /// inactive.
    fn show(&mut self, i: usize, surface: &mut impl Surface) {
        if self.slides.is_empty() {
            return;
        }
        self.index = i;
        for (k, slide) in self.slides.iter().enumerate() {
            surface.set_class(slide.node, "active", k == i);
        }
    }

    pub fn prev(&mut self, surface: &mut impl Surface) {
        if self.slides.is_empty() {
            return;
        }
        let i = (self.index + self.slides.len() - 1) % self.slides.len();
        self.show(i, surface);
    }

    pub fn next(&mut self, surface: &mut impl Surface) {
        if self.slides.is_empty() {
            return;
        }
        let i = (self.index + 1) % self.slides.len();
        self.show(i, surface);
    }

    /// A slide was clicked: the lightbox should open with this carousel's
    /// full ordered list, starting at the clicked slide.
    pub fn slide_clicked(&self, slide: usize) -> Option<(Vec<String>, usize)> {
        if slide >= self.slides.len() {
            return None;
        }
        Some((self.sources(), slide))
    }

    /// Ordered image sources, as handed to the lightbox.
    pub fn sources(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.src.clone()).collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordedPage;

    fn bind(n: usize, page: &mut RecordedPage) -> CardCarousel {
        let slides = (0..n)
            .map(|i| (NodeId(i as u32), format!("img-{i}.avif")))
            .collect();
        CardCarousel::bind(slides, page)
    }

    fn active_slides(page: &RecordedPage, n: usize) -> Vec<usize> {
        (0..n)
            .filter(|&i| page.has_class(NodeId(i as u32), "active"))
            .collect()
    }

    #[test]
    fn bind_activates_first_slide_only() {
        let mut page = RecordedPage::new(1200);
        let carousel = bind(3, &mut page);
        assert_eq!(carousel.index(), 0);
        assert_eq!(active_slides(&page, 3), vec![0]);
    }

    #[test]
    fn next_advances_and_keeps_single_active() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(3, &mut page);
        carousel.next(&mut page);
        assert_eq!(carousel.index(), 1);
        assert_eq!(active_slides(&page, 3), vec![1]);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(4, &mut page);
        carousel.prev(&mut page);
        assert_eq!(carousel.index(), 3);
        assert_eq!(active_slides(&page, 4), vec![3]);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(3, &mut page);
        carousel.next(&mut page);
        carousel.next(&mut page);
        assert_eq!(carousel.index(), 2);
        carousel.next(&mut page);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(5, &mut page);
        for _ in 0..5 {
            carousel.next(&mut page);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn index_stays_in_range_under_mixed_stepping() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(3, &mut page);
        for step in [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, -1] {
            if step > 0 {
                carousel.next(&mut page);
            } else {
                carousel.prev(&mut page);
            }
            assert!(carousel.index() < 3);
            assert_eq!(active_slides(&page, 3).len(), 1);
        }
    }

    #[test]
    fn slide_click_yields_full_list_and_position() {
        let mut page = RecordedPage::new(1200);
        let carousel = bind(3, &mut page);
        let (list, start) = carousel.slide_clicked(2).unwrap();
        assert_eq!(list, vec!["img-0.avif", "img-1.avif", "img-2.avif"]);
        assert_eq!(start, 2);
    }

    #[test]
    fn out_of_range_slide_click_is_rejected() {
        let mut page = RecordedPage::new(1200);
        let carousel = bind(3, &mut page);
        assert!(carousel.slide_clicked(3).is_none());
    }

    #[test]
    fn empty_carousel_steps_are_noops() {
        let mut page = RecordedPage::new(1200);
        let mut carousel = bind(0, &mut page);
        carousel.next(&mut page);
        carousel.prev(&mut page);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.slide_clicked(0).is_none());
    }
}

//! # Pagination Engine
//!
//! Packs measured CONTENT elements into pages of fixed height. The page is
//! the unit of layout: every placement decision is made against the space
//! left on the open page, and the page is closed the moment the next unit
//! no longer fits.
//!
//! ```text
//! ElementDetail[]
//!       ↓
//!   [resolve]       header / sub-header / footer / cover + CONTENT list
//!       ↓
//!   [Paginator]     one CONTENT at a time
//!       ↓           ├─ childless: placed whole
//!       ↓           └─ with children: [children] → [text_split]
//!   [PageBuilder]   open page, sealed into PageDetail on break
//!       ↓
//! PageDetail[]
//! ```
//!
//! A run is sequential and self-contained. All mutable state lives in the
//! `PageBuilder` created for that run, so independent documents can be
//! paginated concurrently.

mod children;
mod page_builder;
mod resolve;
mod text_split;

use log::{debug, warn};

use crate::config::PaginationConfig;
use crate::model::{ElementDetail, PageDetail};
use children::ChildPlacer;
use page_builder::PageBuilder;

/// The pagination engine.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Lay `elements` out on pages `page_height` pixels tall.
    ///
    /// Always returns a best-effort result. Elements that cannot fit any
    /// page are placed anyway and flagged with `overflow`.
    pub fn paginate(&self, elements: &[ElementDetail], page_height: f64) -> Vec<PageDetail> {
        let resolved = resolve::resolve(elements);
        let available = resolved
            .running
            .available_height(page_height, self.config.padding);

        let mut builder = PageBuilder::new(resolved.running, available);
        for content in resolved.contents {
            self.place_content(content, &mut builder);
        }

        let pages = builder.finish();
        debug!(
            "paginated {} elements into {} pages ({:.0} px of content per page)",
            elements.len(),
            pages.len(),
            available
        );
        pages
    }

    fn place_content<'a>(&self, content: &'a ElementDetail, builder: &mut PageBuilder<'a>) {
        if content.forces_page_break() && !builder.is_blank() {
            debug!("page break requested before '{}'", content.id);
            builder.close_page(None);
        }

        match content.children() {
            None => self.place_whole(content, builder),
            Some(children) => {
                ChildPlacer::new(content, builder, &self.config).place_all(children);
            }
        }

        if content.fill {
            // Whatever is left of this page stays blank.
            builder.close_page(Some(content));
        } else {
            builder.attach_children(content);
        }
    }

    fn place_whole(&self, content: &ElementDetail, builder: &mut PageBuilder<'_>) {
        if builder.height() + content.height >= builder.available() && !builder.is_blank() {
            builder.close_page(None);
        }

        let mut element = content.clone();
        if element.height > builder.remaining() {
            warn!(
                "content '{}' is {:.0} px tall but a page holds {:.0} px; placing it alone",
                element.id,
                element.height,
                builder.remaining().max(0.0)
            );
            element.overflow = Some(true);
        }
        builder.push_content(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    fn el(el_type: ElementType, id: &str, height: f64) -> ElementDetail {
        ElementDetail::new(el_type, id, height)
    }

    fn content_ids(page: &PageDetail) -> Vec<&str> {
        page.contents().map(|c| c.id.as_str()).collect()
    }

    /// A paginator whose pages hold exactly `available` px of content.
    fn paginate(elements: &[ElementDetail], available: f64) -> Vec<PageDetail> {
        Paginator::default().paginate(elements, available + 48.0)
    }

    #[test]
    fn childless_content_breaks_when_page_is_full() {
        let elements = vec![
            el(ElementType::Content, "a", 400.0),
            el(ElementType::Content, "b", 400.0),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(content_ids(&pages[0]), vec!["a"]);
        assert_eq!(content_ids(&pages[1]), vec!["b"]);
    }

    #[test]
    fn exact_fill_still_breaks_for_childless_content() {
        let elements = vec![
            el(ElementType::Content, "a", 300.0),
            el(ElementType::Content, "b", 400.0),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn oversized_first_element_does_not_leave_a_blank_page() {
        let elements = vec![
            el(ElementType::Content, "huge", 900.0),
            el(ElementType::Content, "next", 100.0),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(content_ids(&pages[0]), vec!["huge"]);
        assert!(pages[0].el_details[0].is_overflowing());
        assert!(!pages[1].el_details[0].is_overflowing());
    }

    #[test]
    fn page_break_starts_a_new_page() {
        let elements = vec![
            el(ElementType::Content, "a", 100.0),
            el(ElementType::Content, "b", 100.0).with_page_break(),
            el(ElementType::Content, "c", 100.0),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(content_ids(&pages[1]), vec!["b", "c"]);
    }

    #[test]
    fn page_break_on_blank_page_is_a_no_op() {
        let elements = vec![el(ElementType::Content, "a", 100.0).with_page_break()];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn fill_closes_the_page() {
        let elements = vec![
            ElementDetail::content("a", vec![el(ElementType::SubContent, "a1", 100.0)]).with_fill(true),
            el(ElementType::Content, "b", 100.0),
            el(ElementType::Content, "c", 100.0).with_fill(true),
            el(ElementType::Content, "d", 100.0),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 3);
        assert_eq!(content_ids(&pages[0]), vec!["a"]);
        assert_eq!(content_ids(&pages[1]), vec!["b", "c"]);
        assert_eq!(content_ids(&pages[2]), vec!["d"]);
    }

    #[test]
    fn content_with_children_continues_on_a_page_in_progress() {
        let elements = vec![
            el(ElementType::Content, "a", 300.0),
            ElementDetail::content(
                "b",
                vec![
                    el(ElementType::SubContent, "b1", 300.0),
                    el(ElementType::SubContent, "b2", 300.0),
                ],
            ),
        ];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(content_ids(&pages[0]), vec!["a", "b"]);
        assert_eq!(pages[0].el_details[1].height, 300.0);
        assert_eq!(content_ids(&pages[1]), vec!["b"]);
    }

    #[test]
    fn no_content_means_no_pages() {
        let elements = vec![el(ElementType::Header, "h", 50.0), el(ElementType::Footer, "f", 50.0)];
        assert!(paginate(&elements, 700.0).is_empty());
        assert!(paginate(&[], 700.0).is_empty());
    }

    #[test]
    fn cover_alone_makes_one_page() {
        let elements = vec![el(ElementType::CoverPage, "cover", 500.0)];
        let pages = paginate(&elements, 700.0);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].el_details[0].id, "cover");
    }

    #[test]
    fn zero_budget_puts_one_element_per_page() {
        let elements = vec![
            el(ElementType::Header, "h", 2000.0),
            el(ElementType::Content, "a", 10.0),
            el(ElementType::Content, "b", 10.0),
        ];
        let pages = Paginator::default().paginate(&elements, 1000.0);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.contents().count() == 1));
    }
}

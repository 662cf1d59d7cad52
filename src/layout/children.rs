//! # Child Overflow Handling
//!
//! Places the children of one CONTENT element, breaking pages between them
//! as needed. Content headers are held back in a lookahead buffer until the
//! child they label is placed, so a header never ends a page on its own:
//! if the page breaks first, the header moves to the new page with its
//! child.
//!
//! The children are walked once, front to back, by reference. Nothing in
//! the input tree is mutated or cloned wholesale; only the children that
//! land on a page are copied into it.

use log::{debug, warn};

use super::page_builder::PageBuilder;
use crate::config::PaginationConfig;
use crate::model::{ElementDetail, ElementType};

pub(crate) struct ChildPlacer<'a, 'b> {
    pub(super) content: &'a ElementDetail,
    pub(super) builder: &'b mut PageBuilder<'a>,
    pub(super) config: &'b PaginationConfig,
    /// Content headers waiting for the child they label. Their height is
    /// already counted on the open page.
    pending: Vec<&'a ElementDetail>,
    /// The header group emitted most recently, for repetition on
    /// continuation pages.
    last_headers: Vec<&'a ElementDetail>,
}

impl<'a, 'b> ChildPlacer<'a, 'b> {
    pub fn new(
        content: &'a ElementDetail,
        builder: &'b mut PageBuilder<'a>,
        config: &'b PaginationConfig,
    ) -> Self {
        Self {
            content,
            builder,
            config,
            pending: Vec::new(),
            last_headers: Vec::new(),
        }
    }

    /// Place every child in order. Whatever is left buffered at the end
    /// stays on the open page for the caller to wrap.
    pub fn place_all(mut self, children: &'a [ElementDetail]) {
        for child in children {
            match child.el_type {
                ElementType::ContentHeader => self.buffer_header(child),
                _ if self.builder.fits(child.height) => {
                    self.flush_headers();
                    self.builder.push_child(child.clone());
                }
                ElementType::Text => self.split_text(child),
                _ => self.place_overflowing(child),
            }
        }

        if !self.pending.is_empty() {
            debug!(
                "content '{}' ends with {} unfollowed content header(s)",
                self.content.id,
                self.pending.len()
            );
            self.flush_trailing_headers();
        }
    }

    /// Headers left over at the end go on the open page if they fit,
    /// otherwise alone on a new one. If they fit nowhere they are flagged.
    fn flush_trailing_headers(&mut self) {
        if self.builder.remaining() < 0.0 && !self.builder.is_blank() {
            self.break_page();
        }
        if self.builder.remaining() < 0.0 {
            warn!(
                "trailing content header(s) of '{}' exceed a page holding {:.0} px",
                self.content.id,
                self.builder.available()
            );
            for header in &self.pending {
                let mut header = (*header).clone();
                header.overflow = Some(true);
                self.builder.push_counted_child(header);
            }
            self.pending.clear();
            return;
        }
        self.flush_headers();
    }

    fn buffer_header(&mut self, header: &'a ElementDetail) {
        self.builder.add_height(header.height);
        self.pending.push(header);
    }

    /// Emit the buffered headers ahead of the child about to be placed.
    pub(super) fn flush_headers(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        for header in &self.pending {
            self.builder.push_counted_child((*header).clone());
        }
        self.last_headers = std::mem::take(&mut self.pending);
    }

    /// Close the open page and carry any buffered headers onto the next.
    pub(super) fn break_page(&mut self) {
        self.builder.close_page(Some(self.content));

        if self.pending.is_empty() && self.config.repeat_content_headers {
            self.pending = self.last_headers.clone();
        }
        let carried: f64 = self.pending.iter().map(|h| h.height).sum();
        self.builder.add_height(carried);
    }

    /// A child that can't be split and doesn't fit: it starts a new page,
    /// and if it doesn't fit there either it stays alone, flagged.
    fn place_overflowing(&mut self, child: &'a ElementDetail) {
        if !self.builder.is_blank() {
            self.break_page();
        }
        self.flush_headers();

        let mut child = child.clone();
        if !self.builder.fits(child.height) {
            warn!(
                "'{}' in content '{}' is {:.0} px tall but a page holds {:.0} px; placing it alone",
                child.id,
                self.content.id,
                child.height,
                self.builder.available()
            );
            child.overflow = Some(true);
        }
        self.builder.push_child(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resolve::RunningElements;
    use crate::model::PageDetail;

    fn el(el_type: ElementType, id: &str, height: f64) -> ElementDetail {
        ElementDetail::new(el_type, id, height)
    }

    fn place(content: &ElementDetail, available: f64, config: &PaginationConfig) -> Vec<PageDetail> {
        let mut builder = PageBuilder::new(RunningElements::default(), available);
        let children = content.children().unwrap();
        ChildPlacer::new(content, &mut builder, config).place_all(children);
        builder.attach_children(content);
        builder.finish()
    }

    fn child_ids(page: &PageDetail) -> Vec<&str> {
        page.el_details
            .iter()
            .flat_map(|c| c.children().unwrap_or_default())
            .map(|c| c.id.as_str())
            .collect()
    }

    #[test]
    fn header_moves_with_its_child() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::SubContent, "a", 80.0),
                el(ElementType::ContentHeader, "h", 10.0),
                el(ElementType::SubContent, "b", 50.0),
            ],
        );
        let pages = place(&content, 100.0, &PaginationConfig::default());

        assert_eq!(pages.len(), 2);
        assert_eq!(child_ids(&pages[0]), vec!["a"]);
        assert_eq!(child_ids(&pages[1]), vec!["h", "b"]);
        assert_eq!(pages[1].el_details[0].height, 60.0);
    }

    #[test]
    fn oversized_child_sits_alone_and_is_flagged() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::SubContent, "a", 30.0),
                el(ElementType::SubContent, "big", 250.0),
                el(ElementType::SubContent, "b", 30.0),
            ],
        );
        let pages = place(&content, 100.0, &PaginationConfig::default());

        assert_eq!(pages.len(), 3);
        assert_eq!(child_ids(&pages[1]), vec!["big"]);
        let wrapper = &pages[1].el_details[0];
        assert!(wrapper.is_overflowing());
        assert!(wrapper.children().unwrap()[0].is_overflowing());
        assert!(!pages[2].el_details[0].is_overflowing());
    }

    #[test]
    fn trailing_header_is_not_dropped() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::SubContent, "a", 30.0),
                el(ElementType::ContentHeader, "h", 10.0),
            ],
        );
        let pages = place(&content, 100.0, &PaginationConfig::default());
        assert_eq!(child_ids(&pages[0]), vec!["a", "h"]);
    }

    #[test]
    fn trailing_header_that_overfills_moves_to_new_page() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::SubContent, "a", 80.0),
                el(ElementType::ContentHeader, "h", 30.0),
            ],
        );
        let pages = place(&content, 100.0, &PaginationConfig::default());

        assert_eq!(pages.len(), 2);
        assert_eq!(child_ids(&pages[0]), vec!["a"]);
        assert_eq!(pages[0].page_height, 80.0);
        assert_eq!(child_ids(&pages[1]), vec!["h"]);
        assert!(!pages[1].el_details[0].children().unwrap()[0].is_overflowing());
    }

    #[test]
    fn trailing_header_taller_than_page_is_flagged() {
        let content = ElementDetail::content("c", vec![el(ElementType::ContentHeader, "h", 150.0)]);
        let pages = place(&content, 100.0, &PaginationConfig::default());

        assert_eq!(pages.len(), 1);
        let wrapper = &pages[0].el_details[0];
        assert!(wrapper.is_overflowing());
        assert!(wrapper.children().unwrap()[0].is_overflowing());
    }

    #[test]
    fn consecutive_headers_travel_together() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::SubContent, "a", 70.0),
                el(ElementType::ContentHeader, "h1", 10.0),
                el(ElementType::ContentHeader, "h2", 10.0),
                el(ElementType::SubContent, "b", 20.0),
            ],
        );
        let pages = place(&content, 100.0, &PaginationConfig::default());
        assert_eq!(child_ids(&pages[0]), vec!["a"]);
        assert_eq!(child_ids(&pages[1]), vec!["h1", "h2", "b"]);
    }

    #[test]
    fn headers_repeat_on_continuation_pages_when_enabled() {
        let content = ElementDetail::content(
            "c",
            vec![
                el(ElementType::ContentHeader, "h", 10.0),
                el(ElementType::SubContent, "a", 60.0),
                el(ElementType::SubContent, "b", 60.0),
            ],
        );
        let config = PaginationConfig {
            repeat_content_headers: true,
            ..Default::default()
        };
        let pages = place(&content, 100.0, &config);
        assert_eq!(child_ids(&pages[0]), vec!["h", "a"]);
        assert_eq!(child_ids(&pages[1]), vec!["h", "b"]);

        let pages = place(&content, 100.0, &PaginationConfig::default());
        assert_eq!(child_ids(&pages[1]), vec!["b"]);
    }
}

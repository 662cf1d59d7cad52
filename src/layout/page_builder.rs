//! # Page Assembly
//!
//! `PageBuilder` owns the page that is currently open: the content already
//! placed on it, its running height, and the children of the content
//! element in progress that have not been wrapped yet. Closing a page seals
//! it into a `PageDetail` and starts the next one empty.

use log::debug;

use super::resolve::RunningElements;
use crate::model::{total_height, ElementDetail, PageDetail};

#[derive(Debug)]
pub(crate) struct PageBuilder<'a> {
    running: RunningElements<'a>,
    available: f64,
    /// Height used on the open page, including buffered content headers.
    height: f64,
    contents: Vec<ElementDetail>,
    /// Children of the content element in progress.
    children: Vec<ElementDetail>,
    /// The cover page sits on the open page.
    cover_pending: bool,
    pages: Vec<PageDetail>,
}

impl<'a> PageBuilder<'a> {
    pub fn new(running: RunningElements<'a>, available: f64) -> Self {
        let mut builder = Self {
            running,
            available,
            height: 0.0,
            contents: Vec::new(),
            children: Vec::new(),
            cover_pending: false,
            pages: Vec::new(),
        };

        // The cover takes the sub-header's slot, so only the difference
        // comes out of the first page's budget.
        if let Some(cover) = running.cover {
            let sub_header = running.sub_header.map_or(0.0, |s| s.height);
            builder.height = cover.height - sub_header;
            builder.cover_pending = true;
        }

        builder
    }

    pub fn available(&self) -> f64 {
        self.available
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn remaining(&self) -> f64 {
        self.available - self.height
    }

    pub fn fits(&self, height: f64) -> bool {
        self.height + height <= self.available
    }

    /// Nothing has been emitted on the open page yet. Buffered content
    /// headers don't count: they only go out together with a child.
    pub fn is_blank(&self) -> bool {
        !self.cover_pending && self.contents.is_empty() && self.children.is_empty()
    }

    pub fn add_height(&mut self, height: f64) {
        self.height += height;
    }

    pub fn push_content(&mut self, element: ElementDetail) {
        self.height += element.height;
        self.contents.push(element);
    }

    pub fn push_child(&mut self, child: ElementDetail) {
        self.height += child.height;
        self.children.push(child);
    }

    /// Push a child whose height was already added while it was buffered.
    pub fn push_counted_child(&mut self, child: ElementDetail) {
        self.children.push(child);
    }

    /// Wrap the buffered children into a copy of `content` and place it.
    /// Their height is already on the page.
    pub fn attach_children(&mut self, content: &ElementDetail) {
        if self.children.is_empty() {
            return;
        }
        let children = std::mem::take(&mut self.children);
        let mut group = content.regroup(children);
        if group.height > self.available {
            group.overflow = Some(true);
        }
        self.contents.push(group);
    }

    /// Seal the open page. `content` is the element whose buffered children
    /// belong on this page, if any.
    pub fn close_page(&mut self, content: Option<&ElementDetail>) {
        if let Some(content) = content {
            self.attach_children(content);
        }
        debug_assert!(self.children.is_empty(), "children buffered without a content wrapper");

        let second_slot = if self.cover_pending {
            self.running.cover
        } else {
            self.running.sub_header
        };
        let el_details: Vec<ElementDetail> = self
            .running
            .header
            .into_iter()
            .chain(second_slot)
            .cloned()
            .chain(self.contents.drain(..))
            .chain(self.running.footer.cloned())
            .collect();

        let page = PageDetail {
            page_number: self.pages.len() + 1,
            total_pages: 0,
            page_height: total_height(&el_details),
            el_details,
        };
        debug!(
            "closed page {} with {:.0}/{:.0} px of content",
            page.page_number, self.height, self.available
        );
        self.pages.push(page);

        self.height = 0.0;
        self.cover_pending = false;
        self.children.clear();
    }

    /// Close the last page and stamp the final page count on every page.
    pub fn finish(mut self) -> Vec<PageDetail> {
        if !self.is_blank() {
            self.close_page(None);
        }
        let total = self.pages.len();
        for page in &mut self.pages {
            page.total_pages = total;
        }
        self.pages
    }
}

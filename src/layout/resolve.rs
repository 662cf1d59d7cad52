//! # Repeating-Element Resolution
//!
//! Splits the flat input into the running elements that appear on every
//! page (header, sub-header, footer), the one-time cover page, and the
//! ordered CONTENT elements that get packed.

use log::{debug, warn};

use crate::model::{ElementDetail, ElementType};

/// Elements placed around the body of a page rather than packed into it.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunningElements<'a> {
    pub header: Option<&'a ElementDetail>,
    pub sub_header: Option<&'a ElementDetail>,
    pub footer: Option<&'a ElementDetail>,
    pub cover: Option<&'a ElementDetail>,
}

impl RunningElements<'_> {
    /// Height taken by the running elements on every page.
    pub fn reserved_height(&self) -> f64 {
        [self.header, self.footer, self.sub_header]
            .iter()
            .flatten()
            .map(|el| el.height)
            .sum()
    }

    /// The packing budget of one page. Degenerate geometry degrades to zero,
    /// which yields one element per page rather than an error.
    pub fn available_height(&self, page_height: f64, padding: f64) -> f64 {
        let available = page_height - (self.reserved_height() + 2.0 * padding);
        if available.is_nan() || available <= 0.0 {
            warn!(
                "page height {} leaves no room for content ({} px after running elements and padding)",
                page_height, available
            );
            return 0.0;
        }
        available
    }
}

#[derive(Debug, Default)]
pub(crate) struct Resolved<'a> {
    pub running: RunningElements<'a>,
    pub contents: Vec<&'a ElementDetail>,
}

/// Pick the first element of each running type and collect CONTENT in order.
pub(crate) fn resolve(elements: &[ElementDetail]) -> Resolved<'_> {
    let mut resolved = Resolved::default();

    for el in elements {
        let slot = match el.el_type {
            ElementType::Header => &mut resolved.running.header,
            ElementType::SubHeader => &mut resolved.running.sub_header,
            ElementType::Footer => &mut resolved.running.footer,
            ElementType::CoverPage => &mut resolved.running.cover,
            ElementType::Content => {
                resolved.contents.push(el);
                continue;
            }
            other => {
                debug!("not paginating top-level {} element '{}'", other.as_tag(), el.id);
                continue;
            }
        };
        match slot {
            Some(first) => debug!(
                "ignoring {} '{}', already using '{}'",
                el.el_type.as_tag(),
                el.id,
                first.id
            ),
            None => *slot = Some(el),
        }
    }

    resolved
}

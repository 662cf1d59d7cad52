//! # Text Splitting
//!
//! A TEXT child that overflows is not moved as a whole: it is cut into
//! fragments that fill each page down to the last full line. Every fragment
//! records in `text_height` how far into the original block it starts, so
//! the renderer can offset the text it clips.

use log::warn;

use super::children::ChildPlacer;
use crate::model::ElementDetail;

/// Round `height` down to a whole number of lines. A non-positive line
/// height disables snapping.
pub(crate) fn snap_to_lines(height: f64, line_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    if line_height <= 0.0 {
        return height;
    }
    height - height % line_height
}

impl<'a> ChildPlacer<'a, '_> {
    pub(super) fn split_text(&mut self, text: &'a ElementDetail) {
        let line_height = self.config.line_height;
        let total = text.height;
        let mut covered = 0.0;

        while covered < total {
            let rest = total - covered;
            let mut space = snap_to_lines(self.builder.remaining(), line_height);
            let mut forced = false;

            if space <= 0.0 || space < line_height {
                if !self.builder.is_blank() {
                    self.break_page();
                    continue;
                }
                // Not even one line fits on an empty page. Take one anyway
                // so every page makes progress.
                space = if line_height > 0.0 { line_height } else { rest };
                forced = true;
            }

            self.flush_headers();

            let last = rest <= space;
            let height = if last {
                // Room for a trailing gap, but never past the page end.
                (rest + self.config.text_trailing_buffer)
                    .min(self.builder.remaining())
                    .max(rest)
            } else {
                space
            };

            let mut fragment = text.text_fragment(covered, height);
            if forced {
                warn!(
                    "text '{}' in content '{}' gets {:.0} px on a page with {:.0} px free",
                    text.id,
                    self.content.id,
                    height,
                    self.builder.remaining().max(0.0)
                );
                fragment.overflow = Some(true);
            }
            self.builder.push_child(fragment);

            if last {
                covered = total;
            } else {
                covered += space;
                self.break_page();
            }
        }
    }
}

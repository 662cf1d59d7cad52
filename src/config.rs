//! Pagination settings.

use serde::{Deserialize, Serialize};

/// Empty margin reserved at the top and bottom of every page, in pixels.
pub const DEFAULT_PADDING: f64 = 24.0;

/// Line height that text splits snap to, in pixels.
pub const DEFAULT_LINE_HEIGHT: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    /// Reserved twice per page (top and bottom). Defaults to `24`.
    pub padding: f64,

    /// Text fragments end on a multiple of this height so no line is cut
    /// in half. Defaults to `24`.
    pub line_height: f64,

    /// Extra height added to the last fragment of a split text block to
    /// separate it from whatever follows. Never pushes the fragment past
    /// the end of its page. Defaults to one line height.
    pub text_trailing_buffer: f64,

    /// Re-emit the last content header of a content element at the top of
    /// each continuation page. Off by default, in which case every element
    /// appears exactly once.
    pub repeat_content_headers: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            line_height: DEFAULT_LINE_HEIGHT,
            text_trailing_buffer: DEFAULT_LINE_HEIGHT,
            repeat_content_headers: false,
        }
    }
}

impl PaginationConfig {
    /// Same settings with a different page padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

//! # Folio
//!
//! A print-preview pagination engine.
//!
//! Given content whose rendered size is already known, Folio decides where
//! the page breaks fall. Headers, sub-headers and footers repeat on every
//! page, a cover page takes the top of page one, content headers stay
//! glued to the block they label, and text blocks too tall for the space
//! left are cut at line boundaries and continued on the next page.
//!
//! ## Architecture
//!
//! ```text
//! Rendered document (measured by the caller)
//!       ↓
//!   [measure]  normalize a measured node tree
//!       ↓
//!   [model]    ElementDetail list
//!       ↓
//!   [layout]   pack into fixed-height pages
//!       ↓
//!   [model]    PageDetail list, one per page to render
//! ```
//!
//! The engine is pure: no I/O, no global state, and the same input always
//! produces the same pages.

pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod model;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::PaginationConfig;
pub use error::PaginateError;
pub use layout::Paginator;
pub use model::{ElementDetail, ElementType, PageDetail, PageSize};

/// Paginate measured elements onto pages `page_height` pixels tall.
///
/// `None` means nothing has been measured yet, which yields no pages.
/// `padding` defaults to 24 px at the top and at the bottom of each page.
pub fn paginate(
    elements: Option<&[ElementDetail]>,
    page_height: f64,
    padding: Option<f64>,
) -> Vec<PageDetail> {
    let Some(elements) = elements else {
        return Vec::new();
    };
    let mut config = PaginationConfig::default();
    if let Some(padding) = padding {
        config = config.with_padding(padding);
    }
    Paginator::new(config).paginate(elements, page_height)
}

/// Paginate elements given as JSON. A JSON `null` is treated like missing
/// input and yields no pages.
pub fn paginate_json(
    json: &str,
    page_height: f64,
    config: &PaginationConfig,
) -> Result<Vec<PageDetail>, PaginateError> {
    let page_height = error::check_page_height(page_height)?;
    let elements: Option<Vec<ElementDetail>> = serde_json::from_str(json)?;
    Ok(match elements {
        Some(elements) => Paginator::new(config.clone()).paginate(&elements, page_height),
        None => Vec::new(),
    })
}

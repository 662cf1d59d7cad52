//! # Element Model
//!
//! The input and output representation of the pagination engine. Input is a
//! flat list of measured elements, each tagged with what role it plays on a
//! page. Only CONTENT elements carry children (content headers, sub-contents
//! and text blocks), and those children are the units the engine moves
//! between pages.
//!
//! Field names follow the camelCase wire contract of the measurement side,
//! so a measured document can be handed over as JSON unchanged.

use serde::{Deserialize, Serialize};

/// The role a measured element plays in the paginated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    /// Repeats at the top of every page.
    Header,
    /// Repeats below the header on every page except the cover page.
    SubHeader,
    /// Shown once, on the first page, in place of the sub-header.
    CoverPage,
    /// A top-level, independently breakable unit of body content.
    Content,
    /// A label bound to the child that follows it.
    ContentHeader,
    /// A child unit within a content element.
    SubContent,
    /// Repeats at the bottom of every page.
    Footer,
    /// A text block that can be split at line boundaries.
    Text,
    /// Any tag this engine does not recognize. Never paginated.
    #[serde(other)]
    Unknown,
}

impl ElementType {
    /// Parse a tag leniently. Unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "HEADER" => ElementType::Header,
            "SUB_HEADER" => ElementType::SubHeader,
            "COVER_PAGE" => ElementType::CoverPage,
            "CONTENT" => ElementType::Content,
            "CONTENT_HEADER" => ElementType::ContentHeader,
            "SUB_CONTENT" => ElementType::SubContent,
            "FOOTER" => ElementType::Footer,
            "TEXT" => ElementType::Text,
            _ => ElementType::Unknown,
        }
    }

    /// The wire tag for this type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementType::Header => "HEADER",
            ElementType::SubHeader => "SUB_HEADER",
            ElementType::CoverPage => "COVER_PAGE",
            ElementType::Content => "CONTENT",
            ElementType::ContentHeader => "CONTENT_HEADER",
            ElementType::SubContent => "SUB_CONTENT",
            ElementType::Footer => "FOOTER",
            ElementType::Text => "TEXT",
            ElementType::Unknown => "UNKNOWN",
        }
    }
}

/// A measured content unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDetail {
    #[serde(rename = "type")]
    pub el_type: ElementType,

    /// Stable identifier, unique among siblings.
    pub id: String,

    /// Measured height in pixels.
    pub height: f64,

    /// Children of a CONTENT element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_el_details: Option<Vec<ElementDetail>>,

    /// Leave the rest of the page blank once this element is placed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub fill: bool,

    /// Offset of a split text fragment within its original block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_height: Option<f64>,

    /// Set when the element was placed although it exceeds the page budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<bool>,

    /// `"true"` forces this element onto a new page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_break: Option<String>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl ElementDetail {
    /// Create a childless element.
    pub fn new(el_type: ElementType, id: impl Into<String>, height: f64) -> Self {
        Self {
            el_type,
            id: id.into(),
            height,
            child_el_details: None,
            fill: false,
            text_height: None,
            overflow: None,
            page_break: None,
        }
    }

    /// Create a CONTENT element aggregating `children`. The height is the
    /// children sum.
    pub fn content(id: impl Into<String>, children: Vec<ElementDetail>) -> Self {
        let height = total_height(&children);
        Self {
            child_el_details: Some(children),
            ..Self::new(ElementType::Content, id, height)
        }
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_page_break(mut self) -> Self {
        self.page_break = Some("true".to_string());
        self
    }

    /// Children, if there is at least one. An empty list counts as none.
    pub fn children(&self) -> Option<&[ElementDetail]> {
        match self.child_el_details.as_deref() {
            Some(children) if !children.is_empty() => Some(children),
            _ => None,
        }
    }

    pub fn forces_page_break(&self) -> bool {
        self.page_break.as_deref() == Some("true")
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflow == Some(true)
    }

    /// A copy of this content element carrying only `children`, with the
    /// height recomputed from them. The original's own children are not
    /// cloned.
    pub fn regroup(&self, children: Vec<ElementDetail>) -> Self {
        Self {
            el_type: self.el_type,
            id: self.id.clone(),
            height: total_height(&children),
            child_el_details: Some(children),
            fill: self.fill,
            text_height: self.text_height,
            overflow: self.overflow,
            page_break: self.page_break.clone(),
        }
    }

    /// A fragment of this text block starting `offset` pixels into it.
    pub fn text_fragment(&self, offset: f64, height: f64) -> Self {
        Self {
            text_height: Some(offset),
            height,
            ..self.clone()
        }
    }
}

/// Sum of the heights of `elements`.
pub fn total_height(elements: &[ElementDetail]) -> f64 {
    elements.iter().map(|el| el.height).sum()
}

/// One output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetail {
    /// 1-based position in emission order.
    pub page_number: usize,
    /// Total page count of the run, identical on every page.
    pub total_pages: usize,
    /// Sum of the heights of `el_details`.
    pub page_height: f64,
    /// `[header?, sub-header? | cover?, ...content, footer?]`
    pub el_details: Vec<ElementDetail>,
}

impl PageDetail {
    /// The body elements of the page, without header, sub-header, cover
    /// and footer.
    pub fn contents(&self) -> impl Iterator<Item = &ElementDetail> {
        self.el_details.iter().filter(|el| {
            !matches!(
                el.el_type,
                ElementType::Header
                    | ElementType::SubHeader
                    | ElementType::CoverPage
                    | ElementType::Footer
            )
        })
    }
}

/// CSS pixels per inch.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Standard page sizes, measured in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PageSize {
    #[default]
    A4,
    A4Landscape,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in pixels.
    pub fn dimensions(&self) -> (f64, f64) {
        const A4_SHORT: f64 = 8.2677 * PIXELS_PER_INCH;
        const A4_LONG: f64 = 11.6929 * PIXELS_PER_INCH;
        match self {
            PageSize::A4 => (A4_SHORT, A4_LONG),
            PageSize::A4Landscape => (A4_LONG, A4_SHORT),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn height(&self) -> f64 {
        self.dimensions().1
    }
}

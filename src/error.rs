//! Structured error types for the pagination entry points.
//!
//! The engine itself never fails: any well-typed input produces a
//! best-effort page list. Errors only come from the boundaries around it:
//! JSON parsing, page geometry handed in by a caller, and CLI I/O.

use thiserror::Error;

/// The error type returned by the JSON, CLI and wasm entry points.
#[derive(Debug, Error)]
pub enum PaginateError {
    /// JSON input failed to parse as a list of measured elements.
    #[error("Failed to parse elements: {source}{}", format_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// The page height is not a positive, finite pixel value.
    #[error("Invalid page height {0}: must be a positive number of pixels")]
    InvalidPageHeight(f64),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for PaginateError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the element schema. Each element needs `type`, `id` and `height`.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        PaginateError::Parse { source: e, hint }
    }
}

/// Reject page heights the engine cannot pack into.
pub fn check_page_height(page_height: f64) -> Result<f64, PaginateError> {
    if page_height.is_finite() && page_height > 0.0 {
        Ok(page_height)
    } else {
        Err(PaginateError::InvalidPageHeight(page_height))
    }
}

use wasm_bindgen::prelude::*;

use crate::{PaginateError, PaginationConfig, Paginator};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Paginate an array of measured elements. `null` or `undefined` yields an
/// empty array.
#[wasm_bindgen]
pub fn paginate(elements: JsValue, page_height: f64, padding: Option<f64>) -> Result<JsValue, JsValue> {
    let page_height = crate::error::check_page_height(page_height).map_err(to_js_error)?;
    if elements.is_null() || elements.is_undefined() {
        return Ok(js_sys::Array::new().into());
    }

    let elements: Vec<crate::ElementDetail> = serde_wasm_bindgen::from_value(elements)
        .map_err(|e| to_js_error(format!("invalid elements: {}", e)))?;
    let mut config = PaginationConfig::default();
    if let Some(padding) = padding {
        config = config.with_padding(padding);
    }
    let pages = Paginator::new(config).paginate(&elements, page_height);

    serde_wasm_bindgen::to_value(&pages).map_err(to_js_error)
}

/// Paginate elements given as a JSON string, returning the pages as JSON.
#[wasm_bindgen(js_name = paginateJson)]
pub fn paginate_json(json: &str, page_height: f64, padding: Option<f64>) -> Result<String, JsValue> {
    let mut config = PaginationConfig::default();
    if let Some(padding) = padding {
        config = config.with_padding(padding);
    }
    let pages = crate::paginate_json(json, page_height, &config).map_err(to_js_error)?;
    serde_json::to_string(&pages)
        .map_err(PaginateError::from)
        .map_err(to_js_error)
}

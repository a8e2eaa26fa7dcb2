// ============================================================================
// ELEMENT HELPERS
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Like `get_element_by_id` but a missing element is an error
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Current value of an `<input>` or `<select>`; empty for anything else
pub fn input_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        log::warn!("⚠️ [DOM] #{} not found, treating as empty", id);
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Set `style.display`; `shown` is the value used when visible (`block`, `grid`)
pub fn set_display(element: &Element, visible: bool, shown: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", if visible { shown } else { "none" })
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Append markup after the last child without touching existing children
pub fn append_html(element: &Element, html: &str) -> Result<(), JsValue> {
    element.insert_adjacent_html("beforeend", html)
}

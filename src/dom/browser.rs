// ============================================================================
// BROWSER - Location, navigation, cookies, document lifecycle
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::dom::element::{document, window};
use crate::utils::find_cookie;

/// `window.location.href`
pub fn page_url() -> Result<String, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .href()
}

/// Full-page navigation
pub fn navigate(url: &str) -> Result<(), JsValue> {
    log::info!("➡️ [NAV] Navigating to {}", url);
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

/// Read one cookie by exact name
pub fn read_cookie(name: &str) -> Option<String> {
    let raw = document()?.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    find_cookie(&raw, name)
}

/// Run `callback` once the DOM is parsed; immediately if it already is
pub fn on_dom_ready<F>(callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    if doc.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::once_into_js(callback);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
}

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{set_display, set_text_content};
use crate::viewmodels::ErrorBanner;

/// Show or hide the login error element to match the banner
pub fn render_error_banner(banner: &ErrorBanner, element: &Element) -> Result<(), JsValue> {
    match banner.message() {
        Some(message) => {
            set_text_content(element, message);
            set_display(element, true, "block")
        }
        None => set_display(element, false, "block"),
    }
}

// ============================================================================
// SEARCH VIEW - Apply a SearchDisplay to the page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{require_element, set_display, set_inner_html};
use crate::utils::{LOADING_ID, NO_RESULTS_ID, RESTAURANT_GRID_ID};
use crate::viewmodels::SearchDisplay;

/// Elements of the search page that the controller owns
#[derive(Clone)]
pub struct SearchElements {
    pub grid: Element,
    pub loading: Element,
    pub no_results: Element,
}

impl SearchElements {
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self {
            grid: require_element(RESTAURANT_GRID_ID)?,
            loading: require_element(LOADING_ID)?,
            no_results: require_element(NO_RESULTS_ID)?,
        })
    }
}

pub fn render_search(display: &SearchDisplay, elements: &SearchElements) -> Result<(), JsValue> {
    if let Some(markup) = &display.grid_markup {
        set_inner_html(&elements.grid, markup);
    }
    set_display(&elements.loading, display.loading_visible, "block")?;
    set_display(&elements.no_results, display.empty_visible, "block")?;
    set_display(&elements.grid, display.grid_visible, "grid")?;
    Ok(())
}

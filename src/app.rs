// ============================================================================
// APP - Detect which page we are on and mount its controllers
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::controllers::{legacy, LoginController, SearchController};
use crate::dom::get_element_by_id;
use crate::utils::{LEGACY_LIST_ID, LOGIN_FORM_ID, SEARCH_FORM_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Search,
    LegacyList,
}

impl Page {
    fn root_id(self) -> &'static str {
        match self {
            Page::Login => LOGIN_FORM_ID,
            Page::Search => SEARCH_FORM_ID,
            Page::LegacyList => LEGACY_LIST_ID,
        }
    }

    fn mount(self) -> Result<(), JsValue> {
        match self {
            Page::Login => LoginController::mount(),
            Page::Search => SearchController::mount(),
            Page::LegacyList => legacy::mount(),
        }
    }
}

const ALL_PAGES: [Page; 3] = [Page::Login, Page::Search, Page::LegacyList];

/// Pages whose root element is present, in mount order
pub fn detect_pages(is_present: impl Fn(&str) -> bool) -> Vec<Page> {
    ALL_PAGES
        .into_iter()
        .filter(|page| is_present(page.root_id()))
        .collect()
}

/// Mount every controller that has a root element in this document.
/// One failing controller does not stop the others.
pub fn mount_all() {
    let pages = detect_pages(|id| get_element_by_id(id).is_some());
    if pages.is_empty() {
        log::debug!("🎬 [APP] No known page elements, nothing to mount");
        return;
    }

    for page in pages {
        match page.mount() {
            Ok(()) => log::debug!("🎬 [APP] Mounted {:?}", page),
            Err(e) => log::error!("❌ [APP] Failed to mount {:?}: {:?}", page, e),
        }
    }
}

// ============================================================================
// LEGACY LIST - Old #restaurant-list page, served by the search stack
// ============================================================================
// Deprecated: pages should move to the search screen. Kept so the old
// template keeps working; it shares SearchViewModel and ApiClient instead of
// fetching on its own.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{append_html, require_element};
use crate::models::SearchFilters;
use crate::services::ApiClient;
use crate::utils::LEGACY_LIST_ID;
use crate::viewmodels::SearchViewModel;
use crate::views::render_legacy_items;

pub fn mount() -> Result<(), JsValue> {
    let list = require_element(LEGACY_LIST_ID)?;
    log::warn!("⚠️ [LEGACY] #{} is deprecated, use the search page", LEGACY_LIST_ID);

    let api = ApiClient::new();
    let mut vm = SearchViewModel::new();
    let ticket = vm.begin_search(SearchFilters::default());

    spawn_local(async move {
        let result = api.list_restaurants(&ticket.filters).await;
        vm.complete_search(&ticket, result);

        let markup = render_legacy_items(vm.state().restaurants());
        if let Err(e) = append_html(&list, &markup) {
            log::error!("❌ [LEGACY] Error appending restaurants: {:?}", e);
        }
    });

    Ok(())
}

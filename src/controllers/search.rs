// ============================================================================
// SEARCH CONTROLLER - Filters -> listing request -> card grid
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{input_value, on_delegated_click, on_submit, require_element};
use crate::models::SearchFilters;
use crate::services::{parse_favorite_id, ApiClient, FavoriteHandler, LoggingFavorites};
use crate::state::ReactiveState;
use crate::utils::{
    CUISINE_SELECT_ID, FAVORITE_ID_ATTR, LOCATION_INPUT_ID, SEARCH_FORM_ID, SEARCH_INPUT_ID,
};
use crate::viewmodels::SearchViewModel;
use crate::views::{render_search, SearchElements};

pub struct SearchController {
    vm: ReactiveState<SearchViewModel>,
    api: ApiClient,
    favorites: Rc<dyn FavoriteHandler>,
}

impl SearchController {
    pub fn new(api: ApiClient, favorites: Rc<dyn FavoriteHandler>) -> Self {
        Self {
            vm: ReactiveState::new(SearchViewModel::new()),
            api,
            favorites,
        }
    }

    /// Bind to `#searchForm` and run the initial load
    pub fn mount() -> Result<(), JsValue> {
        let form = require_element(SEARCH_FORM_ID)?;
        let elements = SearchElements::from_document()?;
        let controller = Rc::new(Self::new(ApiClient::new(), Rc::new(LoggingFavorites)));

        {
            let reader = controller.vm.clone();
            let elements = elements.clone();
            controller.vm.subscribe(move || {
                let display = reader.with(|vm| vm.display(&CONFIG));
                if let Err(e) = render_search(&display, &elements) {
                    log::error!("❌ [SEARCH] Error rendering results: {:?}", e);
                }
            });
        }

        {
            let favorites = controller.favorites.clone();
            on_delegated_click(&elements.grid, FAVORITE_ID_ATTR, move |raw| {
                match parse_favorite_id(Some(raw.as_str())) {
                    Some(id) => favorites.toggle_favorite(id),
                    None => log::warn!("⚠️ [SEARCH] Bad favorite id: {:?}", raw),
                }
            })?;
        }

        {
            let controller = controller.clone();
            on_submit(&form, move || Self::load(&controller, read_filters()))?;
        }

        Self::load(&controller, read_filters());
        log::info!("✅ [SEARCH] Search form bound");
        Ok(())
    }

    /// Start a search. A response that arrives after a newer search was
    /// started is dropped by the view-model.
    pub fn load(this: &Rc<Self>, filters: SearchFilters) {
        log::debug!("🔍 [SEARCH] Loading restaurants with {:?}", filters);
        let ticket = this.vm.update(|vm| vm.begin_search(filters));

        let this = this.clone();
        spawn_local(async move {
            let result = this.api.list_restaurants(&ticket.filters).await;
            if this.vm.update_silent(|vm| vm.complete_search(&ticket, result)) {
                this.vm.with(|vm| {
                    log::debug!(
                        "🔍 [SEARCH] {} restaurants for {:?}",
                        vm.state().restaurants().len(),
                        vm.filters()
                    )
                });
                this.vm.notify();
            }
        });
    }
}

fn read_filters() -> SearchFilters {
    SearchFilters::from_inputs(
        &input_value(SEARCH_INPUT_ID),
        &input_value(LOCATION_INPUT_ID),
        &input_value(CUISINE_SELECT_ID),
    )
}

// ============================================================================
// SEARCH VIEWMODEL - Filters, results, UI state, stale-response guard
// ============================================================================

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::models::{Restaurant, SearchFilters};
use crate::state::{RequestId, RequestSequence, UiState};
use crate::views::restaurant_card::render_restaurant_cards;

/// Handed out when a search starts; must be presented when it completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: RequestId,
    pub filters: SearchFilters,
}

/// Visibility of the three screen regions plus new grid content.
/// Exactly one of loading / grid / empty is visible outside `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDisplay {
    pub loading_visible: bool,
    pub grid_visible: bool,
    pub empty_visible: bool,
    /// Replacement for the grid content; `None` leaves it untouched
    pub grid_markup: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct SearchViewModel {
    filters: SearchFilters,
    state: UiState,
    sequence: RequestSequence,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` and issue a ticket for the request about to be sent
    pub fn begin_search(&mut self, filters: SearchFilters) -> SearchTicket {
        let id = self.sequence.issue();
        self.filters = filters.clone();
        self.state = UiState::Loading;
        SearchTicket { id, filters }
    }

    /// Apply a finished request. Returns `false` when the ticket was
    /// superseded by a newer search; the state is left untouched then.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<Restaurant>, ClientError>,
    ) -> bool {
        if !self.sequence.is_current(ticket.id) {
            log::debug!(
                "🗑️ [SEARCH] Discarding stale response for request #{}",
                ticket.id.value()
            );
            return false;
        }

        self.state = match result {
            Ok(restaurants) => UiState::from_results(restaurants),
            Err(err) => {
                log::error!("❌ [SEARCH] Error loading restaurants: {}", err);
                UiState::Error
            }
        };
        true
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn display(&self, config: &AppConfig) -> SearchDisplay {
        match &self.state {
            UiState::Idle => SearchDisplay {
                loading_visible: false,
                grid_visible: false,
                empty_visible: false,
                grid_markup: None,
            },
            UiState::Loading => SearchDisplay {
                loading_visible: true,
                grid_visible: false,
                empty_visible: false,
                grid_markup: None,
            },
            UiState::Populated(restaurants) => SearchDisplay {
                loading_visible: false,
                grid_visible: true,
                empty_visible: false,
                grid_markup: Some(render_restaurant_cards(restaurants, config)),
            },
            UiState::Empty | UiState::Error => SearchDisplay {
                loading_visible: false,
                grid_visible: false,
                empty_visible: true,
                grid_markup: None,
            },
        }
    }
}

use crate::models::Restaurant;

/// What a search screen is showing right now
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Populated(Vec<Restaurant>),
    Empty,
    /// Fetch failed; displayed exactly like `Empty`
    Error,
}

impl UiState {
    pub fn from_results(restaurants: Vec<Restaurant>) -> Self {
        if restaurants.is_empty() {
            UiState::Empty
        } else {
            UiState::Populated(restaurants)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        match self {
            UiState::Populated(list) => list,
            _ => &[],
        }
    }
}

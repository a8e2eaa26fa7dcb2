use serde::{Deserialize, Serialize};

/// Filters typed into the search form. Blank fields are stored as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<String>,
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl SearchFilters {
    /// Build from raw input values, trimming each and dropping empties
    pub fn from_inputs(search: &str, location: &str, cuisine: &str) -> Self {
        Self {
            search: normalize(search),
            location: normalize(location),
            cuisine: normalize(cuisine),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.location.is_none() && self.cuisine.is_none()
    }

    /// Present filters in wire order: search, location, cuisine
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.as_deref()),
            ("location", self.location.as_deref()),
            ("cuisine", self.cuisine.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base` plus the query string; no `?` when there is nothing to filter on
    pub fn apply_to(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, self.query_string())
        }
    }
}

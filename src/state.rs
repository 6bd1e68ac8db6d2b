use dashmap::DashMap;

use crate::models::location::LocationSnapshot;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub locations: DashMap<String, LocationSnapshot>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            locations: DashMap::new(),
            metrics: Metrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

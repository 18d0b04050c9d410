//! Application state for the web layer.

use crate::groups::SignGroups;
use crate::source::ArrivalClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Live stop groups, one poller each.
    pub groups: SignGroups<ArrivalClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(groups: SignGroups<ArrivalClient>) -> Self {
        Self { groups }
    }
}

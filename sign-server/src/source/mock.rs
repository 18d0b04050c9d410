//! Mock arrival source for testing without a backend.
//!
//! Serves scripted per-stop results, with injectable failures and
//! induced latency, so poller timing and cancellation behavior can be
//! tested deterministically.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::stops::StopId;

use super::ArrivalSource;
use super::error::SourceError;
use super::types::Arrival;

/// Scripted state for one stop.
#[derive(Debug, Clone)]
struct MockStop {
    result: Result<Vec<Arrival>, String>,
    latency: Duration,
}

impl Default for MockStop {
    fn default() -> Self {
        Self {
            result: Ok(Vec::new()),
            latency: Duration::ZERO,
        }
    }
}

/// Mock arrival source serving in-memory scripted data.
///
/// Stops with no scripted entry fail their fetch, mirroring a backend
/// that knows nothing about the stop.
#[derive(Debug, Clone, Default)]
pub struct MockArrivalSource {
    stops: Arc<RwLock<HashMap<StopId, MockStop>>>,
}

impl MockArrivalSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for a stop.
    pub async fn set_arrivals(&self, stop_id: StopId, arrivals: Vec<Arrival>) {
        let mut stops = self.stops.write().await;
        stops.entry(stop_id).or_default().result = Ok(arrivals);
    }

    /// Script a fetch failure for a stop.
    pub async fn set_failure(&self, stop_id: StopId, message: impl Into<String>) {
        let mut stops = self.stops.write().await;
        stops.entry(stop_id).or_default().result = Err(message.into());
    }

    /// Induce latency on a stop's responses.
    pub async fn set_latency(&self, stop_id: StopId, latency: Duration) {
        let mut stops = self.stops.write().await;
        stops.entry(stop_id).or_default().latency = latency;
    }
}

impl ArrivalSource for MockArrivalSource {
    async fn get_arrivals_for_stop(&self, stop_id: &StopId) -> Result<Vec<Arrival>, SourceError> {
        // Clone out of the lock so induced latency doesn't hold it.
        let scripted = {
            let stops = self.stops.read().await;
            stops.get(stop_id).cloned()
        };

        let Some(stop) = scripted else {
            return Err(SourceError::Mock(format!(
                "no scripted data for stop {stop_id}"
            )));
        };

        if !stop.latency.is_zero() {
            tokio::time::sleep(stop.latency).await;
        }

        stop.result.map_err(SourceError::Mock)
    }
}

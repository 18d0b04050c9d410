//! Arrivals API collaborator.
//!
//! The backend exposes one endpoint per stop,
//! `GET {base}/stops/{stopId}/arrivals`, returning a JSON array of
//! arrivals. Anything other than a 2xx response is a fetch failure;
//! the poller treats a failed stop as failing its whole cycle.

mod client;
mod error;
mod mock;
mod types;

pub use client::{ArrivalClient, ArrivalClientConfig};
pub use error::SourceError;
pub use mock::MockArrivalSource;
pub use types::Arrival;

use crate::stops::StopId;

/// A provider of current arrivals for a single stop.
///
/// Implemented by the real HTTP client and by [`MockArrivalSource`],
/// which scripts results, failures, and latency for deterministic tests.
pub trait ArrivalSource: Send + Sync + 'static {
    /// Fetch the upcoming arrivals for one stop.
    fn get_arrivals_for_stop(
        &self,
        stop_id: &StopId,
    ) -> impl std::future::Future<Output = Result<Vec<Arrival>, SourceError>> + Send;
}

//! Polling loop that keeps a stop group's arrival snapshot fresh.
//!
//! Each [`StopPoller`] owns one background task that fetches every stop
//! in its set concurrently on a fixed cadence. Publication is guarded
//! by a generation counter: changing the stop set (or dropping the
//! poller) bumps the generation, so a slow in-flight cycle that
//! completes afterwards can never overwrite newer data with a stale
//! result. The next cycle is scheduled from the completion of the
//! current one, so cycles never overlap.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::source::{Arrival, ArrivalSource, SourceError};
use crate::stops::StopId;

/// Default time between fetch cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// The latest observable state of one poller.
#[derive(Debug, Clone, Default)]
pub struct PollSnapshot {
    /// Most recent successfully merged arrival list. `None` until the
    /// first cycle succeeds. A failed cycle leaves the previous value
    /// in place: a stale sign beats a blank one.
    pub data: Option<Arc<Vec<Arrival>>>,

    /// True while a fetch cycle is in flight.
    pub loading: bool,

    /// Failure from the most recent cycle, cleared when the next begins.
    pub error: Option<Arc<SourceError>>,
}

/// State shared between a poller handle and its fetch task.
struct Shared {
    snapshot: RwLock<PollSnapshot>,
    generation: AtomicU64,
}

/// Continuously polls a set of stops and merges their arrivals.
///
/// Pollers are fully independent of each other; each owns its own
/// snapshot and cancellation scope. Dropping the poller cancels the
/// fetch loop and suppresses any pending publication.
pub struct StopPoller<S> {
    source: S,
    interval: Duration,
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

impl<S: ArrivalSource + Clone> StopPoller<S> {
    /// Start polling the given stops. The first fetch begins immediately.
    pub fn new(source: S, stops: Vec<StopId>, interval: Duration) -> Self {
        let shared = Arc::new(Shared {
            snapshot: RwLock::new(PollSnapshot::default()),
            generation: AtomicU64::new(0),
        });
        let task = spawn_poll_loop(source.clone(), stops, interval, shared.clone(), 0);

        Self {
            source,
            interval,
            shared,
            task,
        }
    }

    /// Replace the stop set, cancelling the previous fetch loop.
    ///
    /// A cycle started for the old set is suppressed even if its
    /// requests are already in flight. The new set fetches immediately;
    /// previously published `data` stays visible until that fetch
    /// publishes or fails.
    pub fn set_stops(&mut self, stops: Vec<StopId>) {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.task.abort();
        self.task = spawn_poll_loop(
            self.source.clone(),
            stops,
            self.interval,
            self.shared.clone(),
            generation,
        );
    }

    /// The latest published state.
    pub async fn snapshot(&self) -> PollSnapshot {
        self.shared.snapshot.read().await.clone()
    }
}

impl<S> Drop for StopPoller<S> {
    fn drop(&mut self) {
        // Bump first so a cycle mid-publish sees it is stale, then stop
        // the loop from scheduling further cycles.
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        self.task.abort();
    }
}

fn spawn_poll_loop<S: ArrivalSource>(
    source: S,
    stops: Vec<StopId>,
    interval: Duration,
    shared: Arc<Shared>,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            run_cycle(&source, &stops, &shared, generation).await;

            if shared.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            // Interval measured from cycle completion, not cycle start,
            // so cycles never overlap even when fetches run long.
            tokio::time::sleep(interval).await;
        }
    })
}

/// One fetch cycle: mark loading, fan out one request per stop, then
/// publish either the merged list or the first failure.
async fn run_cycle<S: ArrivalSource>(
    source: &S,
    stops: &[StopId],
    shared: &Shared,
    generation: u64,
) {
    {
        let mut snapshot = shared.snapshot.write().await;
        if shared.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        snapshot.loading = true;
        snapshot.error = None;
    }

    // join_all preserves input order, so the merged list is ordered by
    // stop id order then source order regardless of completion order.
    let results = join_all(stops.iter().map(|stop| source.get_arrivals_for_stop(stop))).await;

    let mut snapshot = shared.snapshot.write().await;
    if shared.generation.load(Ordering::SeqCst) != generation {
        return;
    }
    snapshot.loading = false;

    let mut merged = Vec::new();
    for result in results {
        match result {
            Ok(arrivals) => merged.extend(arrivals),
            Err(e) => {
                // Any failed stop fails the whole cycle: the sign is
                // either fully fresh or reporting an error, never a
                // silent subset.
                warn!(error = %e, "arrival fetch cycle failed");
                snapshot.error = Some(Arc::new(e));
                return;
            }
        }
    }

    debug!(
        arrivals = merged.len(),
        stops = stops.len(),
        "published arrival snapshot"
    );
    snapshot.data = Some(Arc::new(merged));
}

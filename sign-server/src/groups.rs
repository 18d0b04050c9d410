//! Named stop groups and their pollers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::poller::{PollSnapshot, StopPoller};
use crate::source::ArrivalSource;
use crate::stops::StopId;

/// A user-defined collection of stops displayed and polled together as
/// one logical sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopGroupConfig {
    pub name: String,
    pub stop_ids: Vec<StopId>,
}

struct GroupEntry<S> {
    config: StopGroupConfig,
    poller: StopPoller<S>,
}

/// Registry of live stop groups, one poller per group.
///
/// Groups exist only for the lifetime of the process. Removing a group
/// (or dropping the registry) drops its poller, which cancels the
/// fetch loop and suppresses any pending publication.
#[derive(Clone)]
pub struct SignGroups<S> {
    inner: Arc<RwLock<HashMap<String, GroupEntry<S>>>>,
    source: S,
    interval: Duration,
}

impl<S: ArrivalSource + Clone> SignGroups<S> {
    /// Create an empty registry polling with the given interval.
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            source,
            interval,
        }
    }

    /// Create a group, or repoint an existing group of the same name.
    ///
    /// Repointing reuses the group's poller via `set_stops`, so the
    /// old stop set's in-flight fetch is cancelled and the new set
    /// fetches immediately.
    pub async fn add(&self, config: StopGroupConfig) {
        let mut guard = self.inner.write().await;

        match guard.get_mut(&config.name) {
            Some(entry) => {
                entry.poller.set_stops(config.stop_ids.clone());
                entry.config = config;
            }
            None => {
                let poller = StopPoller::new(
                    self.source.clone(),
                    config.stop_ids.clone(),
                    self.interval,
                );
                guard.insert(config.name.clone(), GroupEntry { config, poller });
            }
        }
    }

    /// Remove a group, cancelling its poller. Returns false when no
    /// group had that name.
    pub async fn remove(&self, name: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(name).is_some()
    }

    /// All group configs, sorted by name for stable listings.
    pub async fn list(&self) -> Vec<StopGroupConfig> {
        let guard = self.inner.read().await;
        let mut configs: Vec<StopGroupConfig> =
            guard.values().map(|e| e.config.clone()).collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// A group's config and latest poll snapshot, or `None` when the
    /// group doesn't exist.
    pub async fn board(&self, name: &str) -> Option<(StopGroupConfig, PollSnapshot)> {
        let guard = self.inner.read().await;
        let entry = guard.get(name)?;
        let snapshot = entry.poller.snapshot().await;
        Some((entry.config.clone(), snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Arrival, MockArrivalSource};

    fn arrival(route: &str, eta: i64) -> Arrival {
        Arrival {
            route_id: format!("1_{route}"),
            route_short_name: route.to_string(),
            headsign: "Downtown".to_string(),
            eta_seconds: eta,
            arrival_time_epoch_ms: 0,
            predicted: true,
        }
    }

    fn stop(id: &str) -> StopId {
        StopId::parse(id).unwrap()
    }

    fn groups() -> (SignGroups<MockArrivalSource>, MockArrivalSource) {
        let source = MockArrivalSource::new();
        let groups = SignGroups::new(source.clone(), Duration::from_secs(10));
        (groups, source)
    }

    /// Poll until the named group has published data at least once.
    async fn wait_for_data(groups: &SignGroups<MockArrivalSource>, name: &str) {
        for _ in 0..1000 {
            let published = match groups.board(name).await {
                Some((_, snapshot)) => snapshot.data.is_some(),
                None => false,
            };
            if published {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("group {name} never published data");
    }

    #[tokio::test(start_paused = true)]
    async fn add_list_remove() {
        let (groups, _source) = groups();

        groups
            .add(StopGroupConfig {
                name: "campus".to_string(),
                stop_ids: vec![stop("1_100")],
            })
            .await;
        groups
            .add(StopGroupConfig {
                name: "airport".to_string(),
                stop_ids: vec![stop("1_200"), stop("1_201")],
            })
            .await;

        let listed = groups.list().await;
        assert_eq!(listed.len(), 2);
        // Sorted by name
        assert_eq!(listed[0].name, "airport");
        assert_eq!(listed[1].name, "campus");

        assert!(groups.remove("campus").await);
        assert!(!groups.remove("campus").await);
        assert_eq!(groups.list().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn board_merges_group_stops() {
        let (groups, source) = groups();
        let a = stop("1_100");
        let b = stop("1_200");
        source.set_arrivals(a.clone(), vec![arrival("7", 120)]).await;
        source.set_arrivals(b.clone(), vec![arrival("44", 60)]).await;

        groups
            .add(StopGroupConfig {
                name: "home".to_string(),
                stop_ids: vec![a, b],
            })
            .await;

        // Let the first cycle publish.
        wait_for_data(&groups, "home").await;

        let (config, snapshot) = groups.board("home").await.unwrap();
        assert_eq!(config.stop_ids.len(), 2);
        assert_eq!(snapshot.data.unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn board_for_unknown_group_is_none() {
        let (groups, _source) = groups();
        assert!(groups.board("nowhere").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn readding_repoints_existing_group() {
        let (groups, source) = groups();
        let a = stop("1_100");
        let b = stop("1_200");
        source.set_arrivals(a.clone(), vec![arrival("7", 120)]).await;
        source.set_arrivals(b.clone(), vec![arrival("44", 60)]).await;

        groups
            .add(StopGroupConfig {
                name: "home".to_string(),
                stop_ids: vec![a],
            })
            .await;
        groups
            .add(StopGroupConfig {
                name: "home".to_string(),
                stop_ids: vec![b],
            })
            .await;

        assert_eq!(groups.list().await.len(), 1);
        let (config, _) = groups.board("home").await.unwrap();
        assert_eq!(config.stop_ids[0].as_str(), "1_200");

        // Wait for the new stop set's data specifically: the old set may
        // have published before the repoint.
        for _ in 0..1000 {
            let done = match groups.board("home").await {
                Some((_, snapshot)) => snapshot
                    .data
                    .as_ref()
                    .is_some_and(|d| d.first().is_some_and(|a| a.route_short_name == "44")),
                None => false,
            };
            if done {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let (_, snapshot) = groups.board("home").await.unwrap();
        let data = snapshot.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].route_short_name, "44");
    }
}

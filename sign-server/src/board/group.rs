//! Route and direction grouping.

use std::collections::HashMap;

use crate::source::Arrival;

/// One arrival within a direction: just what a sign row needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionArrival {
    pub eta_seconds: i64,
    pub predicted: bool,
}

/// Arrivals sharing a headsign within one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionGroup {
    /// Grouping key: the destination text on the vehicle.
    pub headsign: String,

    /// Ascending by `eta_seconds`. Never empty: a direction only exists
    /// because at least one arrival produced it.
    pub arrivals: Vec<DirectionArrival>,
}

impl DirectionGroup {
    /// True when every arrival in this direction comes from the static
    /// timetable rather than live vehicle tracking.
    ///
    /// Recomputed on each call: the arrival list can mix predicted and
    /// scheduled entries, so this is never stored.
    pub fn scheduled_only(&self) -> bool {
        self.arrivals.iter().all(|a| !a.predicted)
    }

    fn earliest(&self) -> i64 {
        self.arrivals
            .first()
            .map(|a| a.eta_seconds)
            .unwrap_or(i64::MAX)
    }
}

/// All upcoming arrivals for one route, grouped by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// Opaque stable route identifier.
    pub route_id: String,

    /// Display label, taken from the first arrival seen for the route.
    pub route_short_name: String,

    /// Minimum `eta_seconds` across the route. Sort key only, never
    /// displayed directly.
    pub next_arrival: i64,

    /// Ascending by each direction's earliest arrival.
    pub directions: Vec<DirectionGroup>,
}

/// Group a flat arrival list into the sorted route/direction hierarchy.
///
/// Routes keep first-seen identity while building, then everything is
/// sorted by imminence: arrivals within a direction, directions within
/// a route by their earliest arrival, routes by `next_arrival`. Empty
/// input yields empty output.
pub fn group_arrivals_by_route(arrivals: &[Arrival]) -> Vec<RouteGroup> {
    let mut routes: Vec<RouteGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for arrival in arrivals {
        let route_pos = *index.entry(arrival.route_id.as_str()).or_insert_with(|| {
            routes.push(RouteGroup {
                route_id: arrival.route_id.clone(),
                route_short_name: arrival.route_short_name.clone(),
                next_arrival: arrival.eta_seconds,
                directions: Vec::new(),
            });
            routes.len() - 1
        });

        let route = &mut routes[route_pos];
        route.next_arrival = route.next_arrival.min(arrival.eta_seconds);

        let direction_pos = match route
            .directions
            .iter()
            .position(|d| d.headsign == arrival.headsign)
        {
            Some(pos) => pos,
            None => {
                route.directions.push(DirectionGroup {
                    headsign: arrival.headsign.clone(),
                    arrivals: Vec::new(),
                });
                route.directions.len() - 1
            }
        };

        route.directions[direction_pos].arrivals.push(DirectionArrival {
            eta_seconds: arrival.eta_seconds,
            predicted: arrival.predicted,
        });
    }

    for route in &mut routes {
        for direction in &mut route.directions {
            direction.arrivals.sort_by_key(|a| a.eta_seconds);
        }
        route.directions.sort_by_key(|d| d.earliest());
    }
    routes.sort_by_key(|r| r.next_arrival);

    routes
}

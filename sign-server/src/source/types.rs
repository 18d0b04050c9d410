//! Arrival wire types.

use serde::{Deserialize, Serialize};

/// A single upcoming arrival at a stop, as returned by the arrivals API.
///
/// `eta_seconds` is relative to fetch time and may be zero or negative
/// (an overdue vehicle). `arrival_time_epoch_ms` is only used as a
/// uniqueness key alongside `route_id` when rendering lists, never for
/// countdown math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Opaque stable identifier for the route.
    pub route_id: String,

    /// Short human-readable route label (e.g. "7").
    pub route_short_name: String,

    /// Destination text shown on the vehicle.
    pub headsign: String,

    /// Signed seconds until arrival, relative to fetch time.
    pub eta_seconds: i64,

    /// Absolute arrival time in milliseconds since the epoch.
    pub arrival_time_epoch_ms: i64,

    /// True when based on live vehicle tracking, false when based on
    /// the published schedule only.
    pub predicted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_wire_format() {
        let json = r#"{
            "routeId": "1_100223",
            "routeShortName": "7",
            "headsign": "Downtown Seattle",
            "etaSeconds": 312,
            "arrivalTimeEpochMs": 1735000000000,
            "predicted": true
        }"#;

        let arrival: Arrival = serde_json::from_str(json).unwrap();
        assert_eq!(arrival.route_id, "1_100223");
        assert_eq!(arrival.route_short_name, "7");
        assert_eq!(arrival.headsign, "Downtown Seattle");
        assert_eq!(arrival.eta_seconds, 312);
        assert_eq!(arrival.arrival_time_epoch_ms, 1735000000000);
        assert!(arrival.predicted);
    }

    #[test]
    fn deserialize_negative_eta() {
        // Overdue vehicles report negative countdowns; not an error.
        let json = r#"{
            "routeId": "1_100223",
            "routeShortName": "7",
            "headsign": "Downtown Seattle",
            "etaSeconds": -45,
            "arrivalTimeEpochMs": 1735000000000,
            "predicted": false
        }"#;

        let arrival: Arrival = serde_json::from_str(json).unwrap();
        assert_eq!(arrival.eta_seconds, -45);
        assert!(!arrival.predicted);
    }

    #[test]
    fn serialize_uses_camel_case() {
        let arrival = Arrival {
            route_id: "1_100223".to_string(),
            route_short_name: "7".to_string(),
            headsign: "Downtown Seattle".to_string(),
            eta_seconds: 60,
            arrival_time_epoch_ms: 1735000000000,
            predicted: true,
        };

        let json = serde_json::to_value(&arrival).unwrap();
        assert_eq!(json["routeId"], "1_100223");
        assert_eq!(json["etaSeconds"], 60);
        assert_eq!(json["arrivalTimeEpochMs"], 1735000000000i64);
    }
}

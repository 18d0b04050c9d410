//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{EtaDisplay, RouteGroup, format_eta, group_arrivals_by_route};
use crate::groups::StopGroupConfig;
use crate::poller::PollSnapshot;

/// Request to create or replace a stop group.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Group name; doubles as the sign's title.
    pub name: String,

    /// Raw stop ids; ids without an agency prefix are normalized.
    pub stop_ids: Vec<String>,
}

/// One group in listings and creation responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub name: String,
    pub stop_ids: Vec<String>,
}

/// Response for the group listing.
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<GroupSummary>,
}

/// Error body returned by failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One rendered arrival row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDto {
    /// Formatted countdown ("NOW" or whole minutes).
    pub eta: EtaDisplay,

    /// Raw countdown, for clients that re-render locally.
    pub eta_seconds: i64,

    /// False when this row comes from the static timetable only.
    pub predicted: bool,
}

/// One direction (headsign) within a route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionDto {
    pub headsign: String,

    /// True when every arrival in this direction is schedule-based.
    pub scheduled_only: bool,

    pub arrivals: Vec<ArrivalDto>,
}

/// One route on the sign.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub route_id: String,
    pub route_short_name: String,
    pub directions: Vec<DirectionDto>,
}

/// The full rendered sign for one stop group.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub group: String,

    /// "error", "updating", or "live".
    pub status: &'static str,

    /// Message from the most recent failed cycle, if any.
    pub error: Option<String>,

    /// Wall-clock render time (RFC 3339), independent of fetch timing.
    pub updated_at: String,

    /// `None` before the first successful fetch; an empty list means
    /// "no scheduled arrivals", which is not an error.
    pub routes: Option<Vec<RouteDto>>,
}

/// Render a poll snapshot into the sign response.
///
/// Status precedence matches the sign header: an error wins over
/// loading, loading wins over live.
pub fn build_board(
    config: &StopGroupConfig,
    snapshot: &PollSnapshot,
    now: DateTime<Utc>,
) -> BoardResponse {
    let status = if snapshot.error.is_some() {
        "error"
    } else if snapshot.loading {
        "updating"
    } else {
        "live"
    };

    let routes = snapshot.data.as_ref().map(|arrivals| {
        group_arrivals_by_route(arrivals)
            .into_iter()
            .map(route_dto)
            .collect()
    });

    BoardResponse {
        group: config.name.clone(),
        status,
        error: snapshot.error.as_ref().map(|e| e.to_string()),
        updated_at: now.to_rfc3339(),
        routes,
    }
}

fn route_dto(route: RouteGroup) -> RouteDto {
    RouteDto {
        route_id: route.route_id,
        route_short_name: route.route_short_name,
        directions: route
            .directions
            .into_iter()
            .map(|direction| DirectionDto {
                scheduled_only: direction.scheduled_only(),
                arrivals: direction
                    .arrivals
                    .iter()
                    .map(|a| ArrivalDto {
                        eta: format_eta(a.eta_seconds),
                        eta_seconds: a.eta_seconds,
                        predicted: a.predicted,
                    })
                    .collect(),
                headsign: direction.headsign,
            })
            .collect(),
    }
}

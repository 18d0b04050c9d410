//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use chrono::Utc;

use crate::groups::StopGroupConfig;
use crate::stops::StopId;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/:name", delete(remove_group))
        .route("/groups/:name/board", get(group_board))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stop groups.
async fn list_groups(State(state): State<AppState>) -> Json<GroupListResponse> {
    let groups = state
        .groups
        .list()
        .await
        .into_iter()
        .map(summary)
        .collect();

    Json(GroupListResponse { groups })
}

/// Create a stop group, or repoint an existing one.
async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupSummary>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: "group name must not be empty".to_string(),
        });
    }
    if req.stop_ids.is_empty() {
        return Err(AppError::BadRequest {
            message: "a group needs at least one stop id".to_string(),
        });
    }

    let mut stop_ids = Vec::with_capacity(req.stop_ids.len());
    for raw in &req.stop_ids {
        let stop = StopId::normalize(raw).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;
        stop_ids.push(stop);
    }

    let config = StopGroupConfig {
        name: name.to_string(),
        stop_ids,
    };
    let response = summary(config.clone());
    state.groups.add(config).await;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Remove a stop group, stopping its poller.
async fn remove_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.groups.remove(&name).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("no stop group named {name}"),
        })
    }
}

/// Rendered sign for one stop group.
async fn group_board(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BoardResponse>, AppError> {
    let (config, snapshot) =
        state
            .groups
            .board(&name)
            .await
            .ok_or_else(|| AppError::NotFound {
                message: format!("no stop group named {name}"),
            })?;

    Ok(Json(build_board(&config, &snapshot, Utc::now())))
}

fn summary(config: StopGroupConfig) -> GroupSummary {
    GroupSummary {
        name: config.name,
        stop_ids: config
            .stop_ids
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    }
}

/// Application-level errors for web handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::debug!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

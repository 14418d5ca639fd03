//! Request API endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::{created, ApiResult, JsonBody};
use crate::models::{Record, Request, ID_FIELD};
use crate::AppState;

/// POST /request - Submit a request.
pub async fn create_request(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<Record>,
) -> ApiResult<(StatusCode, Json<Request>)> {
    let request = state.repo.create_request(fields).await?;
    Ok(created(request))
}

/// POST /pending-requests - List requests not yet accepted.
pub async fn list_pending_requests(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Request>>> {
    Ok(Json(state.repo.list_pending_requests().await?))
}

/// POST /approve-request - Accept a request by id.
pub async fn approve_request(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<Request>> {
    let request = state.repo.approve_request(body.get(ID_FIELD)).await?;
    Ok(Json(request))
}

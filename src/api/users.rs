//! User API endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::{created, ApiResult, JsonBody};
use crate::models::{
    Record, User, EMAIL_FIELD, PASSWORD_FIELD, PRIVATE_SETTING_FIELD, USER_ID_FIELD,
};
use crate::AppState;

/// POST /register - Create a user from arbitrary fields.
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<Record>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.repo.register_user(fields).await?;
    Ok(created(user))
}

/// POST /login - Match email and password against registered users.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<User>> {
    let user = state
        .repo
        .login(body.get(EMAIL_FIELD), body.get(PASSWORD_FIELD))
        .await?;
    Ok(Json(user))
}

/// POST /users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.repo.list_users().await?))
}

/// POST /update-privacy - Change a user's privacy setting.
pub async fn update_privacy(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<User>> {
    let user = state
        .repo
        .update_privacy(
            body.get(USER_ID_FIELD),
            body.get(PRIVATE_SETTING_FIELD).cloned(),
        )
        .await?;
    Ok(Json(user))
}

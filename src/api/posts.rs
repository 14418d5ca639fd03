//! Post API endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::{created, ApiResult, JsonBody};
use crate::models::{Post, Record, COMMENT_FIELD, ID_FIELD, POST_ID_FIELD, USER_ID_FIELD};
use crate::AppState;

/// POST /post - Create a post.
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<Record>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let post = state.repo.create_post(fields).await?;
    Ok(created(post))
}

/// POST /posts - List all posts.
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.repo.list_posts().await?))
}

/// POST /user-posts - List the posts of one user.
pub async fn list_user_posts(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.repo.list_user_posts(body.get(USER_ID_FIELD)).await?))
}

/// POST /delete-post - Delete a post. Always 204, even for unknown ids.
pub async fn delete_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<StatusCode> {
    state.repo.remove_post(body.get(ID_FIELD)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /like-post - Add a like.
pub async fn like_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<Post>> {
    let post = state.repo.like_post(body.get(POST_ID_FIELD)).await?;
    Ok(Json(post))
}

/// POST /comment - Append a comment.
pub async fn comment_on_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<Post>> {
    let post = state
        .repo
        .comment_on_post(body.get(POST_ID_FIELD), body.get(COMMENT_FIELD).cloned())
        .await?;
    Ok(Json(post))
}

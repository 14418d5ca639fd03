//! Repository implementing the user, request and post operations.
//!
//! Each operation is one load, scan/mutate, save cycle over a whole
//! collection. Nothing serializes overlapping cycles, so two concurrent
//! writers to the same collection can lose one of the updates.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::{Collection, Store};
use crate::errors::AppError;
use crate::models::{
    add_like, is_pending, mark_accepted, matches_field, new_record, push_comment,
    set_private_setting, Post, Record, Request, User, EMAIL_FIELD, ID_FIELD, PASSWORD_FIELD,
    USER_ID_FIELD,
};

/// Repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn Store>,
}

impl Repository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Append a new record stamped with the current time as its id.
    async fn insert(&self, collection: Collection, fields: Record) -> Result<Record, AppError> {
        let mut records = self.store.load(collection).await?;
        let record = new_record(now_id(), fields);
        records.push(record.clone());
        self.store.save(collection, &records).await?;
        Ok(record)
    }

    /// Apply `mutate` to the first record whose `field` equals `id`, then persist.
    ///
    /// Returns `None` without saving if no record matches.
    async fn update_first<F>(
        &self,
        collection: Collection,
        field: &str,
        id: Option<&Value>,
        mutate: F,
    ) -> Result<Option<Record>, AppError>
    where
        F: FnOnce(&mut Record),
    {
        let mut records = self.store.load(collection).await?;
        let Some(record) = records.iter_mut().find(|r| matches_field(r, field, id)) else {
            return Ok(None);
        };
        mutate(record);
        let updated = record.clone();
        self.store.save(collection, &records).await?;
        Ok(Some(updated))
    }

    // ==================== USER OPERATIONS ====================

    /// Register a new user. Emails are not checked for uniqueness.
    pub async fn register_user(&self, fields: Record) -> Result<User, AppError> {
        let user = self.insert(Collection::Users, fields).await?;
        tracing::info!(id = ?user.get(ID_FIELD), "registered user");
        Ok(user)
    }

    /// Find the first user whose email and password both match exactly.
    pub async fn login(
        &self,
        email: Option<&Value>,
        password: Option<&Value>,
    ) -> Result<User, AppError> {
        let users = self.store.load(Collection::Users).await?;
        users
            .into_iter()
            .find(|u| {
                matches_field(u, EMAIL_FIELD, email) && matches_field(u, PASSWORD_FIELD, password)
            })
            .ok_or(AppError::InvalidCredentials)
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store.load(Collection::Users).await
    }

    /// Set (or clear) `privateSetting` on the user with `user_id`.
    pub async fn update_privacy(
        &self,
        user_id: Option<&Value>,
        setting: Option<Value>,
    ) -> Result<User, AppError> {
        self.update_first(Collection::Users, ID_FIELD, user_id, |user| {
            set_private_setting(user, setting)
        })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    // ==================== REQUEST OPERATIONS ====================

    /// Submit a new request.
    pub async fn create_request(&self, fields: Record) -> Result<Request, AppError> {
        let request = self.insert(Collection::Requests, fields).await?;
        tracing::info!(id = ?request.get(ID_FIELD), "created request");
        Ok(request)
    }

    /// List requests that have not been accepted.
    pub async fn list_pending_requests(&self) -> Result<Vec<Request>, AppError> {
        let requests = self.store.load(Collection::Requests).await?;
        Ok(requests.into_iter().filter(is_pending).collect())
    }

    /// Mark a request accepted. Approving twice leaves it accepted.
    pub async fn approve_request(&self, id: Option<&Value>) -> Result<Request, AppError> {
        self.update_first(Collection::Requests, ID_FIELD, id, mark_accepted)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))
    }

    // ==================== POST OPERATIONS ====================

    /// Create a new post.
    pub async fn create_post(&self, fields: Record) -> Result<Post, AppError> {
        let post = self.insert(Collection::Posts, fields).await?;
        tracing::info!(id = ?post.get(ID_FIELD), "created post");
        Ok(post)
    }

    /// List all posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.store.load(Collection::Posts).await
    }

    /// List posts whose `userId` equals `user_id`.
    pub async fn list_user_posts(&self, user_id: Option<&Value>) -> Result<Vec<Post>, AppError> {
        let posts = self.store.load(Collection::Posts).await?;
        Ok(posts
            .into_iter()
            .filter(|p| matches_field(p, USER_ID_FIELD, user_id))
            .collect())
    }

    /// Delete every post with `id`. Deleting an unknown id is not an error.
    pub async fn remove_post(&self, id: Option<&Value>) -> Result<(), AppError> {
        let mut posts = self.store.load(Collection::Posts).await?;
        let before = posts.len();
        posts.retain(|p| !matches_field(p, ID_FIELD, id));
        self.store.save(Collection::Posts, &posts).await?;
        tracing::info!(removed = before - posts.len(), "removed post");
        Ok(())
    }

    /// Add one like to a post.
    pub async fn like_post(&self, post_id: Option<&Value>) -> Result<Post, AppError> {
        self.update_first(Collection::Posts, ID_FIELD, post_id, add_like)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Append a comment to a post.
    pub async fn comment_on_post(
        &self,
        post_id: Option<&Value>,
        comment: Option<Value>,
    ) -> Result<Post, AppError> {
        self.update_first(Collection::Posts, ID_FIELD, post_id, |post| {
            push_comment(post, comment)
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}

/// Milliseconds since the Unix epoch. Not unique across concurrent creates.
fn now_id() -> i64 {
    Utc::now().timestamp_millis()
}

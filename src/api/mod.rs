//! REST API module.
//!
//! Every endpoint is a POST taking a JSON body and answering with the raw
//! record(s) on success or an [`ErrorResponse`](crate::errors::ErrorResponse) on failure.

mod posts;
mod requests;
mod users;

pub use posts::*;
pub use requests::*;
pub use users::*;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Response type for handlers: the success body or an error.
pub type ApiResult<T> = Result<T, AppError>;

/// A 201 response carrying the created record.
pub fn created<T>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// JSON body extractor that treats an empty body as `T::default()`.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        Ok(JsonBody(serde_json::from_slice(&bytes)?))
    }
}

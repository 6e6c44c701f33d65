//! Request extractors whose rejections render as [`AppError`] bodies.
//!
//! Axum's stock `Path` and `Json` rejections answer with plain text; these
//! wrappers keep every error response in the `{ "error", "code" }` shape.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::types::RecordId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Record id taken from the `{id}` path parameter.
///
/// An id that does not parse as an integer cannot match any record, so it is
/// rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct RecordPath(pub RecordId);

impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppPath(raw) = AppPath::<String>::from_request_parts(parts, state).await?;

        raw.parse::<RecordId>()
            .map(RecordPath)
            .map_err(|_| AppError::NotFound)
    }
}

/// Path parameters deserialized into `T`.
#[derive(Debug, Clone)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(AppPath(value))
    }
}

/// JSON request body.
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

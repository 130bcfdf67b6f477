//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every malformed request gets the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use comics_core::error::CoreError;
use comics_core::types::ComicId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// The `{id}` path segment, parsed as a [`ComicId`].
#[derive(Debug, Clone, Copy)]
pub struct ComicIdPath(pub ComicId);

impl<S> FromRequestParts<S> for ComicIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        let id = ComicId::parse_str(&raw).map_err(|_| invalid_id())?;
        Ok(Self(id))
    }
}

fn invalid_id() -> AppError {
    AppError::BadRequest("Invalid UUID format".into())
}

/// A JSON body that has been decoded into `T` and passed `T::validate()`.
///
/// Undecodable bodies (bad syntax, wrong types, missing fields, missing
/// `Content-Type`) and failed validation rules are both client errors. The
/// body must be a JSON object; serde would otherwise accept a struct written
/// as an array (`[1]`).
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if !raw.is_object() {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            ));
        }
        let value = serde_json::from_value::<T>(raw).map_err(|err| {
            AppError::BadRequest(format!(
                "Failed to deserialize the JSON body into the target type: {err}"
            ))
        })?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

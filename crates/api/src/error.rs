use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use comics_core::error::CoreError;
use comics_db::error::GatewayError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GatewayError`] for storage
/// outcomes, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce the error object `{ description, error, type }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `comics_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A gateway failure, tagged with the operation that was attempted.
    #[error("{action} failed: {source}")]
    Gateway {
        action: &'static str,
        #[source]
        source: GatewayError,
    },

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Attach an action name to a gateway error, for use with `map_err`.
    ///
    /// ```ignore
    /// state.comics.list().await.map_err(AppError::during("List comics"))?;
    /// ```
    pub fn during(action: &'static str) -> impl FnOnce(GatewayError) -> AppError {
        move |source| AppError::Gateway { action, source }
    }
}

/// Who caused an error: the caller or the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Client,
    Internal,
}

/// The JSON body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub description: String,
    pub error: &'static str,
    #[serde(rename = "type")]
    pub kind: ErrorType,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorBody {
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: "BAD_REQUEST",
            kind: ErrorType::Client,
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: "NOT_FOUND",
            kind: ErrorType::Client,
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn method_not_allowed(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: "METHOD_NOT_ALLOWED",
            kind: ErrorType::Client,
            status: StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn request_timeout(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: "REQUEST_TIMEOUT",
            kind: ErrorType::Client,
            status: StatusCode::REQUEST_TIMEOUT,
        }
    }

    pub fn internal(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: "INTERNAL_ERROR",
            kind: ErrorType::Internal,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            // --- Domain validation ---
            AppError::Core(CoreError::Validation(msg)) => ErrorBody::bad_request(msg.clone()),

            // --- Gateway outcomes ---
            AppError::Gateway { action, source } => match source {
                GatewayError::NotFound { entity, id } => {
                    ErrorBody::not_found(format!("{entity} with id {id} not found"))
                }
                GatewayError::Storage(err) => {
                    tracing::error!(error = %err, action = %action, "Storage error");
                    ErrorBody::internal(format!("{action} failed"))
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => ErrorBody::bad_request(msg.clone()),
        };

        body.into_response()
    }
}

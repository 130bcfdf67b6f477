pub mod comics;
pub mod health;

use axum::Router;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /comics                 list, create
/// /comics/{id}            get price, change price, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/comics", comics::router())
}

/// Fallback for paths no route matches.
pub async fn not_found() -> ErrorBody {
    ErrorBody::not_found("Route not found")
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ErrorBody {
    ErrorBody::method_not_allowed("Method not allowed")
}

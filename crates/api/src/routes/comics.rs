//! Route definitions for the `/comics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::comics;
use crate::state::AppState;

/// Routes mounted at `/comics`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_price
/// PUT    /{id}    -> change_price
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comics::list).post(comics::create))
        .route(
            "/{id}",
            get(comics::get_price)
                .put(comics::change_price)
                .delete(comics::delete),
        )
}

//! Handlers for the `/comics` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use comics_db::models::comics::{Comics, CreateComics, UpdateComicsPrice};

use crate::error::{AppError, AppResult};
use crate::extract::{ComicIdPath, ValidJson};
use crate::response::{PriceResponse, SuccessResponse};
use crate::state::AppState;

/// GET /comics
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Comics>>> {
    let comics = state
        .comics
        .list()
        .await
        .map_err(AppError::during("List comics"))?;
    Ok(Json(comics))
}

/// GET /comics/{id}
///
/// Returns only the price of the record.
pub async fn get_price(
    State(state): State<AppState>,
    ComicIdPath(id): ComicIdPath,
) -> AppResult<Json<PriceResponse>> {
    let comics = state
        .comics
        .get_by_id(id)
        .await
        .map_err(AppError::during("Get comics price"))?;
    Ok(Json(PriceResponse {
        price: comics.price,
    }))
}

/// POST /comics
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateComics>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    let comics = state
        .comics
        .create(&input)
        .await
        .map_err(AppError::during("Create comics"))?;

    tracing::info!(comics_id = %comics.id, name = %comics.name, "Comics created");

    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

/// PUT /comics/{id}
///
/// Only `price` is read from the body.
pub async fn change_price(
    State(state): State<AppState>,
    ComicIdPath(id): ComicIdPath,
    ValidJson(input): ValidJson<UpdateComicsPrice>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .comics
        .update_price(id, input.price)
        .await
        .map_err(AppError::during("Change price"))?;

    tracing::info!(comics_id = %id, price = input.price, "Comics price changed");

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /comics/{id}
pub async fn delete(
    State(state): State<AppState>,
    ComicIdPath(id): ComicIdPath,
) -> AppResult<Json<SuccessResponse>> {
    state
        .comics
        .delete(id)
        .await
        .map_err(AppError::during("Delete comics"))?;

    tracing::info!(comics_id = %id, "Comics deleted");

    Ok(Json(SuccessResponse::ok()))
}

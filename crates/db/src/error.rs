use comics_core::types::ComicId;

/// Outcome of a failed gateway operation.
///
/// The existence check performed before every point operation is the only
/// source of [`GatewayError::NotFound`]; any other fault is
/// [`GatewayError::Storage`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: ComicId },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

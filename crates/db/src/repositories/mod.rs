//! Repository layer.
//!
//! [`ComicsGateway`] is the seam between HTTP handlers and storage. Handlers
//! receive an `Arc<dyn ComicsGateway>` through application state, so the
//! PostgreSQL and in-memory implementations are interchangeable.

pub mod comics_repo;
pub mod memory_repo;

pub use comics_repo::ComicsRepo;
pub use memory_repo::MemoryComicsRepo;

use async_trait::async_trait;
use comics_core::types::ComicId;

use crate::error::GatewayError;
use crate::models::comics::{Comics, CreateComics};

/// The five single-row operations over the comics table.
///
/// `update_price` and `delete` first confirm the id exists;
/// that lookup alone decides `NotFound`. A failure of the write that follows
/// is always reported as `Storage`.
#[async_trait]
pub trait ComicsGateway: Send + Sync {
    /// All records in insertion order. An empty table is not an error.
    async fn list(&self) -> Result<Vec<Comics>, GatewayError>;

    async fn get_by_id(&self, id: ComicId) -> Result<Comics, GatewayError>;

    /// Insert a new record with a freshly generated id, returning it.
    async fn create(&self, input: &CreateComics) -> Result<Comics, GatewayError>;

    async fn update_price(&self, id: ComicId, price: u64) -> Result<(), GatewayError>;

    async fn delete(&self, id: ComicId) -> Result<(), GatewayError>;
}

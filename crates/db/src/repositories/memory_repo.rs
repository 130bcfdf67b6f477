//! In-process [`ComicsGateway`] backed by an insertion-ordered `Vec`.
//!
//! Used by the HTTP test suite and by `STORAGE=memory` for running the
//! service without PostgreSQL. Contents are lost when the process exits.

use async_trait::async_trait;
use comics_core::comics::ENTITY;
use comics_core::types::ComicId;
use tokio::sync::RwLock;

use crate::error::GatewayError;
use crate::models::comics::{Comics, CreateComics};
use crate::repositories::ComicsGateway;

#[derive(Debug, Default)]
pub struct MemoryComicsRepo {
    rows: RwLock<Vec<Comics>>,
}

impl MemoryComicsRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComicsGateway for MemoryComicsRepo {
    async fn list(&self) -> Result<Vec<Comics>, GatewayError> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: ComicId) -> Result<Comics, GatewayError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound { entity: ENTITY, id })
    }

    async fn create(&self, input: &CreateComics) -> Result<Comics, GatewayError> {
        let row = Comics::from_input(ComicId::new_v4(), input);
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn update_price(&self, id: ComicId, price: u64) -> Result<(), GatewayError> {
        // Lookup and write happen under one write guard.
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GatewayError::NotFound { entity: ENTITY, id })?;
        row.price = price;
        Ok(())
    }

    async fn delete(&self, id: ComicId) -> Result<(), GatewayError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|c| c.id == id)
            .ok_or(GatewayError::NotFound { entity: ENTITY, id })?;
        rows.remove(index);
        Ok(())
    }
}

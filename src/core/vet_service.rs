use crate::core::{Result, VetStore, VetView};
use crate::domain::model::project;
use std::sync::Arc;

/// Lists the clinic's vets as presentation snapshots.
#[derive(Clone)]
pub struct VetService {
    store: Arc<dyn VetStore>,
}

impl VetService {
    pub fn new(store: Arc<dyn VetStore>) -> Self {
        Self { store }
    }

    /// All vets in the order the store returns them.
    ///
    /// The fetch runs inside a read-only transaction that is committed on
    /// success and rolled back on failure. Store errors are returned as-is.
    pub async fn list_all(&self) -> Result<Vec<VetView>> {
        let mut tx = self.store.begin_read_only().await?;

        let vets = match tx.fetch_all().await {
            Ok(vets) => {
                tx.commit().await?;
                vets
            }
            Err(e) => {
                tracing::debug!("Vet fetch failed, rolling back: {}", e);
                tx.rollback().await;
                return Err(e);
            }
        };

        tracing::debug!("Fetched {} vets", vets.len());
        Ok(vets.iter().map(project).collect())
    }
}

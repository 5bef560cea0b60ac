use crate::core::{ReadTransaction, Result, Vet, VetStore};
use crate::domain::model::VetPayload;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads vets from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileVetStore {
    path: PathBuf,
}

impl JsonFileVetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

struct FileReadTx<'a> {
    path: &'a Path,
}

#[async_trait]
impl ReadTransaction for FileReadTx<'_> {
    async fn fetch_all(&mut self) -> Result<Vec<Vet>> {
        tracing::debug!("Reading vets from {}", self.path.display());
        let data = tokio::fs::read(self.path).await?;
        let payload: VetPayload = serde_json::from_slice(&data)?;
        Ok(payload.into_vets())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) {}
}

#[async_trait]
impl VetStore for JsonFileVetStore {
    async fn begin_read_only(&self) -> Result<Box<dyn ReadTransaction + '_>> {
        Ok(Box::new(FileReadTx { path: &self.path }))
    }
}

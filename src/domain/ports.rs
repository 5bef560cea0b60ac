use crate::domain::model::Vet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of a store, scoped to one read-only transaction.
///
/// Every transaction handed out by [`VetStore::begin_read_only`] is ended
/// with exactly one of `commit` or `rollback`.
#[async_trait]
pub trait ReadTransaction: Send {
    async fn fetch_all(&mut self) -> Result<Vec<Vet>>;
    async fn commit(self: Box<Self>) -> Result<()>;
    async fn rollback(self: Box<Self>);
}

#[async_trait]
pub trait VetStore: Send + Sync {
    async fn begin_read_only(&self) -> Result<Box<dyn ReadTransaction + '_>>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_kind(&self) -> &str;
    fn data_file(&self) -> Option<&str>;
    fn endpoint(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> Vec<(String, String)>;
    fn output_format(&self) -> &str;
}

use crate::core::{ReadTransaction, Result, Vet, VetStore};
use crate::domain::model::VetPayload;
use crate::utils::error::VetError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches vets from a remote JSON endpoint such as a clinic's `/vets`.
#[derive(Debug, Clone)]
pub struct HttpVetStore {
    endpoint: String,
    headers: Vec<(String, String)>,
    client: Client,
}

impl HttpVetStore {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            headers: Vec::new(),
            client,
        })
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

struct HttpReadTx<'a> {
    store: &'a HttpVetStore,
}

#[async_trait]
impl ReadTransaction for HttpReadTx<'_> {
    async fn fetch_all(&mut self) -> Result<Vec<Vet>> {
        let store = self.store;
        tracing::debug!("Making API request to: {}", store.endpoint);

        let mut request = store
            .client
            .get(&store.endpoint)
            .header(reqwest::header::ACCEPT, "application/json");
        for (name, value) in &store.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(VetError::store(format!(
                "{} returned status {}",
                store.endpoint, status
            )));
        }

        let body = response.bytes().await?;
        let payload: VetPayload = serde_json::from_slice(&body)?;
        Ok(payload.into_vets())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) {}
}

#[async_trait]
impl VetStore for HttpVetStore {
    async fn begin_read_only(&self) -> Result<Box<dyn ReadTransaction + '_>> {
        Ok(Box::new(HttpReadTx { store: self }))
    }
}

//! Sui fullnode JSON-RPC client.
//!
//! A thin typed wrapper over jsonrpsee's HTTP client exposing the three
//! read operations the application needs. Every object read requests
//! `showContent` so the parsed Move fields come back in one round trip.

use std::time::Duration;

use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde_json::json;
use tracing::debug;

use futurebox_core::network::Network;
use futurebox_core::types::{ObjectId, SuiAddress};

use crate::rpc::{DynamicFieldPage, ObjectResponse, OwnedObjectPage};

/// Default request timeout for fullnode reads.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for fullnode client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("RPC error: {0}")]
    Rpc(#[from] jsonrpsee::core::ClientError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client for a Sui fullnode's JSON-RPC endpoint.
pub struct SuiClient {
    /// Fullnode URL.
    url: String,
    /// Request timeout.
    timeout: Duration,
}

impl std::fmt::Debug for SuiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiClient").field("url", &self.url).finish()
    }
}

impl SuiClient {
    /// Create a client for a network's default fullnode.
    pub fn for_network(network: Network) -> Self {
        Self::with_url(network.fullnode_url())
    }

    /// Create a client for a specific fullnode URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The fullnode URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_client(&self) -> Result<HttpClient> {
        HttpClientBuilder::default()
            .request_timeout(self.timeout)
            .build(&self.url)
            .map_err(|e| ClientError::Connection(e.to_string()))
    }

    /// Fetch an object by id, including its parsed content.
    pub async fn get_object(&self, id: &ObjectId) -> Result<ObjectResponse> {
        let client = self.build_client()?;
        let response: ObjectResponse = client
            .request(
                "sui_getObject",
                rpc_params![id.as_str(), json!({ "showContent": true })],
            )
            .await?;
        debug!(object = %id, found = response.data.is_some(), "sui_getObject");
        Ok(response)
    }

    /// Enumerate one page of a parent object's dynamic fields.
    ///
    /// No cursor is passed; the collection is whatever the node returns
    /// in its first page.
    pub async fn get_dynamic_fields(&self, parent: &ObjectId) -> Result<DynamicFieldPage> {
        let client = self.build_client()?;
        let page: DynamicFieldPage = client
            .request("suix_getDynamicFields", rpc_params![parent.as_str()])
            .await?;
        debug!(parent = %parent, entries = page.data.len(), "suix_getDynamicFields");
        Ok(page)
    }

    /// List one page of objects owned by `owner`, filtered by struct type.
    pub async fn get_owned_objects(
        &self,
        owner: &SuiAddress,
        struct_type: &str,
    ) -> Result<OwnedObjectPage> {
        let client = self.build_client()?;
        let query = json!({ "filter": { "StructType": struct_type } });
        let page: OwnedObjectPage = client
            .request("suix_getOwnedObjects", rpc_params![owner.as_str(), query])
            .await?;
        debug!(owner = %owner, entries = page.data.len(), "suix_getOwnedObjects");
        Ok(page)
    }
}

use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// ApiTransport port for issuing API requests
///
/// This port abstracts the HTTP collaborator: the core only needs the
/// capability to perform a GET with query parameters and receive a
/// parsed JSON body. Retry policy, pooling and timeouts belong to the
/// implementation, not the core.
///
/// # Async Support
/// Implementations must be `Send + Sync` to support concurrent lookups.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Performs a GET request and parses the response body as JSON
    ///
    /// # Arguments
    /// * `endpoint` - Absolute endpoint URL
    /// * `query` - Query parameters, serialized and escaped by the transport
    ///
    /// # Returns
    /// The parsed JSON body, whatever its shape.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns a non-success status code
    /// - The response body is not valid JSON
    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value>;
}

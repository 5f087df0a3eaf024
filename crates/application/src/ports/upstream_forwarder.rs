use async_trait::async_trait;
use dohgate_domain::DomainError;

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Relay the raw query to an upstream and return its raw response.
    ///
    /// `query_id` is only used for log correlation; the bytes go out untouched.
    async fn forward(&self, query_id: u16, query_bytes: &[u8]) -> Result<Vec<u8>, DomainError>;
}

pub mod https;

use crate::dns::load_balancer::UpstreamEndpoint;
use async_trait::async_trait;
use dohgate_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with a single upstream.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        endpoint: &UpstreamEndpoint,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

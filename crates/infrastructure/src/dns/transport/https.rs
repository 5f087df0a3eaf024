//! HTTPS transport for DNS queries, DNS-over-HTTPS (RFC 8484)
//!
//! Sends DNS queries as HTTP POST requests with `application/dns-message` content type.
//! The request body is the raw DNS wire format message, and the response body
//! contains the raw DNS wire format response.
//!
//! Wire format (HTTP):
//! ```text
//! POST /dns-query HTTP/1.1
//! Content-Type: application/dns-message
//! Accept: application/dns-message
//!
//! <raw DNS message bytes>
//! ```

use super::{DnsTransport, TransportResponse};
use crate::dns::load_balancer::UpstreamEndpoint;
use async_trait::async_trait;
use bytes::Bytes;
use dohgate_domain::DomainError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling across all upstreams.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Media type for both directions (RFC 8484 §6)
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport (RFC 8484)
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpsTransport;

impl HttpsTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    /// Only an exact `200 OK` counts as success.
    ///
    /// Connect/request failures and timeouts before the response head arrive
    /// are reported as retryable errors; a failure while reading the body of a
    /// `200` is reported as [`DomainError::UpstreamBodyRead`].
    async fn send(
        &self,
        endpoint: &UpstreamEndpoint,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        debug!(
            url = %endpoint,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let response = SHARED_CLIENT
            .post(endpoint.url().clone())
            .header(CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)
            .header(ACCEPT, DNS_MESSAGE_CONTENT_TYPE)
            .timeout(timeout)
            .body(Bytes::copy_from_slice(message_bytes))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::TransportTimeout {
                        server: endpoint.to_string(),
                    }
                } else {
                    DomainError::UpstreamRequestFailed {
                        upstream: endpoint.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DomainError::UpstreamHttpStatus {
                upstream: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let response_bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamBodyRead {
                upstream: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            url = %endpoint,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}

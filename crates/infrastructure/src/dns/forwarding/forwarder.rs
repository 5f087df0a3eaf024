use crate::dns::load_balancer::{BalancedSelector, UpstreamEndpoint};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use dohgate_application::ports::UpstreamForwarder;
use dohgate_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Round-robin DoH forwarding with one full cycle of failover per query.
///
/// Every query continues from wherever the shared cursor stands, so a dead
/// upstream is visited again on wrap-around rather than remembered.
pub struct DohForwarder {
    selector: BalancedSelector<UpstreamEndpoint>,
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DohForwarder {
    pub fn new(
        upstreams: Vec<UpstreamEndpoint>,
        transport: Arc<dyn DnsTransport>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            selector: BalancedSelector::new(upstreams)?,
            transport,
            timeout,
        })
    }

    pub fn upstreams(&self) -> &[UpstreamEndpoint] {
        self.selector.servers()
    }
}

#[async_trait]
impl UpstreamForwarder for DohForwarder {
    async fn forward(&self, query_id: u16, query_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let max_attempts = self.selector.len();

        for attempt in 1..=max_attempts {
            let upstream = self.selector.pick();

            debug!(
                id = query_id,
                attempt,
                max_attempts,
                upstream = %upstream,
                protocol = self.transport.protocol_name(),
                "Forwarding request"
            );

            match self.transport.send(upstream, query_bytes, self.timeout).await {
                Ok(response) => {
                    debug!(
                        id = query_id,
                        attempt,
                        upstream = %upstream,
                        protocol = response.protocol_used,
                        len = response.bytes.len(),
                        "Upstream answered"
                    );
                    return Ok(response.bytes);
                }
                Err(e @ DomainError::UpstreamBodyRead { .. }) => return Err(e),
                Err(e) => {
                    warn!(id = query_id, attempt, upstream = %upstream, error = %e, "Upstream attempt failed");
                }
            }
        }

        Err(DomainError::UpstreamsExhausted {
            attempts: max_attempts,
        })
    }
}

use super::wire_response::{build_address_response, build_nxdomain_response};
use dohgate_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use dohgate_domain::{DnsRequest, DomainError, RecordType};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns one raw UDP datagram into the bytes to send back, if any.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    local_ttl: u32,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, local_ttl: u32) -> Self {
        Self {
            use_case,
            local_ttl,
        }
    }

    /// Returns `None` when the datagram must be dropped without a reply.
    pub async fn handle_raw_udp(&self, buf: Arc<[u8]>, client: SocketAddr) -> Option<Vec<u8>> {
        let (message, request) = match decode_request(buf) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!(client = %client, error = %e, "Failed to decode dns message");
                return None;
            }
        };

        debug!(
            id = request.id,
            domain = %request.domain,
            record_type = %request.record_type,
            client = %client,
            "Dns question from"
        );

        let outcome = match self.use_case.execute(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(id = request.id, domain = %request.domain, error = %e, "Failed to handle dns question");
                return None;
            }
        };

        let encoded = match outcome {
            QueryOutcome::Resolved { addresses } => {
                build_address_response(&message, &addresses, self.local_ttl)
            }
            QueryOutcome::Blocked(_) => build_nxdomain_response(&message),
            QueryOutcome::Forwarded { response } => Ok(response),
        };

        match encoded {
            Ok(bytes) => {
                debug!(id = request.id, domain = %request.domain, len = bytes.len(), "dns question answered");
                Some(bytes)
            }
            Err(e) => {
                error!(id = request.id, domain = %request.domain, error = %e, "Failed to encode dns answer");
                None
            }
        }
    }
}

/// Parses the datagram and lifts its first question into a [`DnsRequest`].
pub fn decode_request(buf: Arc<[u8]>) -> Result<(Message, DnsRequest), DomainError> {
    let message = Message::from_vec(&buf).map_err(|e| DomainError::MalformedQuery(e.to_string()))?;

    let query = message
        .queries()
        .first()
        .ok_or_else(|| DomainError::MalformedQuery("message carries no question".to_string()))?;

    let request = DnsRequest::new(
        message.id(),
        &query.name().to_ascii(),
        RecordType::from(u16::from(query.query_type())),
        buf,
    );

    Ok((message, request))
}

use super::RecordType;
use std::sync::Arc;

/// One decoded query: header id, first question and the original wire bytes.
///
/// The raw bytes are kept so that forwarding relays exactly what the client
/// sent instead of a re-encoded message.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub id: u16,
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub raw: Arc<[u8]>,
}

impl DnsRequest {
    pub fn new(
        id: u16,
        domain: &str,
        record_type: RecordType,
        raw: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            id,
            domain: Arc::from(normalize_domain(domain)),
            record_type,
            raw: raw.into(),
        }
    }
}

/// Strips the trailing root label and lowercases ASCII letters.
pub fn normalize_domain(domain: &str) -> String {
    domain
        .strip_suffix('.')
        .unwrap_or(domain)
        .to_ascii_lowercase()
}

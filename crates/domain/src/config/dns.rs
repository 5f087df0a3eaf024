use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL stamped on locally resolved A/AAAA records
    #[serde(default)]
    pub local_ttl: u32,
}

use crate::ports::UpstreamForwarder;
use dohgate_domain::{
    BlockRegexList, Blocklist, DnsRequest, DomainError, RecordType, ResolveTable,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    Blocklist,
    Regex(Arc<str>),
}

/// What the pipeline decided for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Answered from the static table; may be empty on a family mismatch.
    Resolved { addresses: Vec<IpAddr> },
    /// Answered with NXDOMAIN.
    Blocked(BlockReason),
    /// Raw upstream response, relayed verbatim.
    Forwarded { response: Vec<u8> },
}

/// Static resolve → blocklist → regex blocklist → upstream, first hit wins.
///
/// The tables are built once at startup and only ever read here.
pub struct HandleDnsQueryUseCase {
    resolve: Arc<ResolveTable>,
    blocklist: Arc<Blocklist>,
    block_regex: Arc<BlockRegexList>,
    forwarder: Arc<dyn UpstreamForwarder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        resolve: Arc<ResolveTable>,
        blocklist: Arc<Blocklist>,
        block_regex: Arc<BlockRegexList>,
        forwarder: Arc<dyn UpstreamForwarder>,
    ) -> Self {
        Self {
            resolve,
            blocklist,
            block_regex,
            forwarder,
        }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<QueryOutcome, DomainError> {
        if let Some(addresses) = self.try_resolve(request)? {
            return Ok(QueryOutcome::Resolved { addresses });
        }

        if self.blocklist.contains(&request.domain) {
            warn!(id = request.id, domain = %request.domain, "Domain is blocked");
            return Ok(QueryOutcome::Blocked(BlockReason::Blocklist));
        }

        if let Some(pattern) = self.block_regex.first_match(&request.domain) {
            warn!(id = request.id, domain = %request.domain, pattern = %pattern, "Domain is blocked from regex");
            return Ok(QueryOutcome::Blocked(BlockReason::Regex(Arc::from(pattern))));
        }

        let response = self.forwarder.forward(request.id, &request.raw).await?;
        Ok(QueryOutcome::Forwarded { response })
    }

    fn try_resolve(&self, request: &DnsRequest) -> Result<Option<Vec<IpAddr>>, DomainError> {
        let Some(target) = self.resolve.lookup(&request.domain) else {
            return Ok(None);
        };

        debug!(id = request.id, domain = %request.domain, target = %target, "Resolving from static table");

        let ip: IpAddr = target
            .parse()
            .map_err(|_| DomainError::InvalidResolveTarget(target.to_string()))?;

        // IPv4-mapped IPv6 literals answer A questions
        let ip = ip.to_canonical();

        let addresses = match (request.record_type, ip) {
            (RecordType::A, IpAddr::V4(_)) | (RecordType::AAAA, IpAddr::V6(_)) => vec![ip],
            (RecordType::A, IpAddr::V6(_)) | (RecordType::AAAA, IpAddr::V4(_)) => Vec::new(),
            (other, _) => {
                return Err(DomainError::UnsupportedQuestionType(other.to_string()));
            }
        };

        Ok(Some(addresses))
    }
}

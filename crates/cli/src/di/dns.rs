use dohgate_application::use_cases::HandleDnsQueryUseCase;
use dohgate_domain::{BlockRegexList, Blocklist, Config, ResolveTable};
use dohgate_infrastructure::dns::{
    DnsServerHandler, DohForwarder, HttpsTransport, UpstreamEndpoint,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let resolve = Arc::new(ResolveTable::new(&config.resolve));
        let blocklist = Arc::new(Blocklist::new(&config.blocking.blocklist));
        let block_regex = Arc::new(BlockRegexList::compile(&config.blocking.blockregex)?);

        info!(
            resolve_entries = resolve.len(),
            blocklist_entries = blocklist.len(),
            regex_filters = block_regex.len(),
            "Local tables loaded"
        );

        let forwarder = Self::build_forwarder(config)?;

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            resolve,
            blocklist,
            block_regex,
            forwarder,
        ));

        Ok(Self {
            handler: Arc::new(DnsServerHandler::new(use_case, config.dns.local_ttl)),
        })
    }

    fn build_forwarder(config: &Config) -> anyhow::Result<Arc<DohForwarder>> {
        let upstreams = UpstreamEndpoint::parse_all(&config.upstream.servers)?;

        for upstream in &upstreams {
            info!(upstream = %upstream, "Upstream registered");
        }

        let forwarder = DohForwarder::new(
            upstreams,
            Arc::new(HttpsTransport::new()),
            Duration::from_secs(config.upstream.timeout_secs),
        )?;

        info!(
            upstreams = forwarder.upstreams().len(),
            timeout_secs = config.upstream.timeout_secs,
            "DoH forwarder ready"
        );

        Ok(Arc::new(forwarder))
    }
}

use dohgate_infrastructure::dns::{DnsServerHandler, UdpDnsServer};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    num_workers: usize,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, num_workers, "Starting DNS server");

    let server = UdpDnsServer::bind(bind_addr).await.map_err(|e| {
        error!(bind_address = %bind_addr, error = %e, "Failed to bind UDP socket");
        anyhow::anyhow!("failed to listen on {}: {}", bind_addr, e)
    })?;

    info!(listen_address = %server.local_addr()?, "Listening for DNS queries");

    server.run(handler, num_workers).await;
    Ok(())
}

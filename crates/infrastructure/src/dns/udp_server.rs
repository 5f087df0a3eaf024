use super::server::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

const RECV_BUFFER_SIZE: usize = 4096;
const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// UDP listener shared by a fixed set of reader tasks.
///
/// Each datagram is copied out of the reader's buffer and handled on its own
/// task, so a slow upstream never stalls the socket.
pub struct UdpDnsServer {
    socket: Arc<UdpSocket>,
}

impl UdpDnsServer {
    pub async fn bind(addr: SocketAddr) -> io::Result<Self> {
        let socket = create_udp_socket(addr)?;
        Ok(Self {
            socket: Arc::new(UdpSocket::from_std(socket)?),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs until every reader task has exited.
    pub async fn run(self, handler: Arc<DnsServerHandler>, num_workers: usize) {
        let num_workers = num_workers.max(1);
        let local_addr = self.local_addr().ok();
        let mut join_set: JoinSet<()> = JoinSet::new();

        for worker_id in 0..num_workers {
            let socket = self.socket.clone();
            let handler = handler.clone();
            join_set.spawn(async move {
                run_udp_worker(socket, handler, worker_id).await;
            });
        }

        info!(bind_address = ?local_addr, num_workers, "DNS server ready");

        while let Some(result) = join_set.join_next().await {
            if let Err(e) = result {
                error!(error = %e, "UDP worker terminated");
            }
        }
    }
}

async fn run_udp_worker(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>, worker_id: usize) {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (len, client) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(worker = worker_id, error = %e, "Failed to read udp packet");
                continue;
            }
        };

        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..len]);
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw_udp(owned_buf, client).await {
                if let Err(e) = socket.send_to(&response, client).await {
                    error!(client = %client, error = %e, "Failed to write udp response");
                } else {
                    debug!(client = %client, len = response.len(), "UDP response sent");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<std::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}

pub mod forwarding;
pub mod load_balancer;
pub mod server;
pub mod transport;
pub mod udp_server;
pub mod wire_response;

pub use forwarding::DohForwarder;
pub use load_balancer::{BalancedSelector, UpstreamEndpoint};
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, HttpsTransport, TransportResponse};
pub use udp_server::UdpDnsServer;

pub mod balanced;
pub mod endpoint;

pub use balanced::BalancedSelector;
pub use endpoint::UpstreamEndpoint;

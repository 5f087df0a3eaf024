pub mod forwarder;

pub use forwarder::DohForwarder;

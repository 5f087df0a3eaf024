#![allow(dead_code)]
mod mock_forwarder;

pub use mock_forwarder::MockUpstreamForwarder;

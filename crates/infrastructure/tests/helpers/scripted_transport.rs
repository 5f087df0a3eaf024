#![allow(dead_code)]
use async_trait::async_trait;
use dohgate_domain::DomainError;
use dohgate_infrastructure::dns::load_balancer::UpstreamEndpoint;
use dohgate_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Transport that replays a fixed script of outcomes and records every call.
///
/// Once the script is exhausted each call times out.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<Vec<u8>, DomainError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, bytes: &[u8]) -> Self {
        self.script.lock().unwrap().push_back(Ok(bytes.to_vec()));
        self
    }

    pub fn then_err(self, error: DomainError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn then_status(self, status: u16) -> Self {
        self.then_err(DomainError::UpstreamHttpStatus {
            upstream: "scripted".to_string(),
            status,
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        endpoint: &UpstreamEndpoint,
        _message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(bytes)) => Ok(TransportResponse {
                bytes,
                protocol_used: "SCRIPTED",
            }),
            Some(Err(e)) => Err(e),
            None => Err(DomainError::TransportTimeout {
                server: endpoint.to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}

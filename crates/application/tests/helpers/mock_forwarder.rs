use async_trait::async_trait;
use dohgate_application::ports::UpstreamForwarder;
use dohgate_domain::DomainError;
use std::sync::Mutex;

/// Records every forwarded payload and replies with a canned result.
pub struct MockUpstreamForwarder {
    response: Mutex<Result<Vec<u8>, DomainError>>,
    calls: Mutex<Vec<(u16, Vec<u8>)>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(Ok(Vec::new())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(response: Vec<u8>) -> Self {
        let mock = Self::new();
        mock.set_response(Ok(response));
        mock
    }

    pub fn set_response(&self, response: Result<Vec<u8>, DomainError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> Vec<(u16, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockUpstreamForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query_id: u16, query_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((query_id, query_bytes.to_vec()));
        self.response.lock().unwrap().clone()
    }
}

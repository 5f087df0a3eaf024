use dohgate_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lock-free round-robin picker over a fixed list.
///
/// The cursor is the only mutable state; the list itself never changes
/// after construction.
#[derive(Debug)]
pub struct BalancedSelector<T> {
    servers: Vec<T>,
    counter: AtomicUsize,
}

impl<T> BalancedSelector<T> {
    pub fn new(servers: Vec<T>) -> Result<Self, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::EmptyUpstreamList);
        }

        Ok(Self {
            servers,
            counter: AtomicUsize::new(0),
        })
    }

    /// Next server in cyclic order.
    pub fn pick(&self) -> &T {
        &self.servers[self.next_index()]
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn servers(&self) -> &[T] {
        &self.servers
    }

    fn next_index(&self) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed) % self.servers.len()
    }
}

use crate::dns_request::normalize_domain;
use rustc_hash::FxHashSet;

/// Exact-match set of blocked domain names.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    domains: FxHashSet<Box<str>>,
}

impl Blocklist {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| normalize_domain(d.as_ref().trim()))
            .filter(|d| !d.is_empty())
            .map(String::into_boxed_str)
            .collect();

        Self { domains }
    }

    /// `domain` must already be normalized.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

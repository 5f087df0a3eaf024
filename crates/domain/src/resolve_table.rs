use crate::dns_request::normalize_domain;
use rustc_hash::FxHashMap;

/// Static name → IP literal overrides.
///
/// Keys are either exact names or a single wildcard of the form
/// `*.<second-level>.<tld>`. Values are kept as configured; they are parsed
/// per query so a bad literal only affects the names that hit it.
#[derive(Debug, Clone, Default)]
pub struct ResolveTable {
    entries: FxHashMap<Box<str>, Box<str>>,
}

impl ResolveTable {
    /// Entries with an empty target are dropped.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(name, target)| {
                let target = target.as_ref().trim();
                if target.is_empty() {
                    return None;
                }
                let name = normalize_domain(name.as_ref().trim());
                Some((name.into_boxed_str(), Box::from(target)))
            })
            .collect();

        Self { entries }
    }

    /// Exact lookup first, then the wildcard built from the last two labels.
    pub fn lookup(&self, domain: &str) -> Option<&str> {
        if let Some(target) = self.entries.get(domain) {
            return Some(&**target);
        }

        let wildcard = wildcard_key(domain)?;
        self.entries.get(wildcard.as_str()).map(|t| &**t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn wildcard_key(domain: &str) -> Option<String> {
    let mut labels = domain.rsplit('.');
    let tld = labels.next()?;
    let second = labels.next()?;
    Some(format!("*.{}.{}", second, tld))
}

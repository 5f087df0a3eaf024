use crate::errors::DomainError;
use fancy_regex::Regex;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone)]
struct BlockPattern {
    source: Arc<str>,
    regex: Regex,
}

/// Ordered list of compiled block patterns.
///
/// Patterns are tested in configuration order; the first match decides
/// which pattern gets reported. Matching ignores ASCII case, since queried
/// names are lowercased before they get here.
#[derive(Debug, Clone, Default)]
pub struct BlockRegexList {
    patterns: Vec<BlockPattern>,
}

impl BlockRegexList {
    pub fn compile<I, S>(patterns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let source = p.as_ref();
                Regex::new(&format!("(?i){}", source))
                    .map(|regex| BlockPattern {
                        source: Arc::from(source),
                        regex,
                    })
                    .map_err(|e| {
                        DomainError::InvalidRegexFilter(format!("\"{}\": {}", source, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns the source of the first pattern matching `domain`.
    ///
    /// A pattern that aborts at runtime (backtrack limit) counts as no match.
    pub fn first_match(&self, domain: &str) -> Option<&str> {
        self.patterns.iter().find_map(|p| match p.regex.is_match(domain) {
            Ok(true) => Some(&*p.source),
            Ok(false) => None,
            Err(e) => {
                warn!(pattern = %p.source, domain = %domain, error = %e, "Regex evaluation aborted");
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

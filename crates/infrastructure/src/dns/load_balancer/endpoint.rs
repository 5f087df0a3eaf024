use dohgate_domain::DomainError;
use reqwest::Url;
use std::fmt;

/// A DoH server URL, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoint {
    url: Url,
}

impl UpstreamEndpoint {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let url = Url::parse(raw)
            .map_err(|e| DomainError::InvalidUpstreamUrl(format!("\"{}\": {}", raw, e)))?;

        if !matches!(url.scheme(), "https" | "http") {
            return Err(DomainError::InvalidUpstreamUrl(format!(
                "\"{}\": unsupported scheme \"{}\"",
                raw,
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(DomainError::InvalidUpstreamUrl(format!(
                "\"{}\": missing host",
                raw
            )));
        }

        Ok(Self { url })
    }

    pub fn parse_all<I, S>(raw: I) -> Result<Vec<Self>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

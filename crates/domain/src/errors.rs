use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Upstream list cannot be empty")]
    EmptyUpstreamList,

    #[error("Invalid upstream URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("Invalid regex filter: {0}")]
    InvalidRegexFilter(String),

    #[error("Invalid resolve target \"{0}\"")]
    InvalidResolveTarget(String),

    #[error("Unsupported question type \"{0}\"")]
    UnsupportedQuestionType(String),

    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncoding(String),

    #[error("Upstream {upstream} returned HTTP {status}")]
    UpstreamHttpStatus { upstream: String, status: u16 },

    #[error("Request to upstream {upstream} failed: {reason}")]
    UpstreamRequestFailed { upstream: String, reason: String },

    #[error("Failed to read response body from upstream {upstream}: {reason}")]
    UpstreamBodyRead { upstream: String, reason: String },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Max attempts reached: all {attempts} upstream attempts failed")]
    UpstreamsExhausted { attempts: usize },
}

//! dohgate domain layer
pub mod blocklist;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod regex_filter;
pub mod resolve_table;

pub use blocklist::Blocklist;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use dns_request::{normalize_domain, DnsRequest};
pub use errors::DomainError;
pub use regex_filter::BlockRegexList;
pub use resolve_table::ResolveTable;

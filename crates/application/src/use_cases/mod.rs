pub mod dns;

pub use dns::{BlockReason, HandleDnsQueryUseCase, QueryOutcome};

pub mod builders;
pub mod doh_server_mock;
pub mod scripted_transport;

#[allow(unused_imports)]
pub use builders::QueryBuilder;
#[allow(unused_imports)]
pub use doh_server_mock::{MockDohServer, RecordedRequest};
#[allow(unused_imports)]
pub use scripted_transport::ScriptedTransport;

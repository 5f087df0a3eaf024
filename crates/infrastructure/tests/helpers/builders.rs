#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::str::FromStr;

/// Encodes client queries the way a stub resolver would.
pub struct QueryBuilder {
    id: u16,
    name: String,
    record_type: RecordType,
}

impl QueryBuilder {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            id: 0x1234,
            name: name.to_string(),
            record_type,
        }
    }

    pub fn a(name: &str) -> Self {
        Self::new(name, RecordType::A)
    }

    pub fn aaaa(name: &str) -> Self {
        Self::new(name, RecordType::AAAA)
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn message(&self) -> Message {
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(
                Name::from_str(&self.name).unwrap(),
                self.record_type,
            ));
        message
    }

    pub fn build(&self) -> Vec<u8> {
        self.message().to_bytes().unwrap()
    }
}

//! Locally constructed answers, encoded with `hickory-proto`.
//!
//! Every answer echoes the request id and first question and carries
//! QR, RD and RA. Nothing else from the request header is copied.

use dohgate_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;

/// NOERROR answer with one record per address; empty `addresses` yields NODATA.
pub fn build_address_response(
    request: &Message,
    addresses: &[IpAddr],
    ttl: u32,
) -> Result<Vec<u8>, DomainError> {
    let mut response = response_skeleton(request);

    if let Some(question) = request.queries().first() {
        for addr in addresses {
            let rdata = match addr {
                IpAddr::V4(ipv4) => RData::A(A(*ipv4)),
                IpAddr::V6(ipv6) => RData::AAAA(AAAA(*ipv6)),
            };
            response.add_answer(Record::from_rdata(question.name().clone(), ttl, rdata));
        }
    }

    serialize_message(&response)
}

/// NXDOMAIN with no records, used for blocked names.
pub fn build_nxdomain_response(request: &Message) -> Result<Vec<u8>, DomainError> {
    let mut response = response_skeleton(request);
    response.set_response_code(ResponseCode::NXDomain);
    serialize_message(&response)
}

fn response_skeleton(request: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .set_recursion_available(true);

    if let Some(question) = request.queries().first() {
        response.add_query(question.clone());
    }

    response
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::MessageEncoding(e.to_string()))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::Query;
    use hickory_proto::rr::{Name, RecordType};
    use std::str::FromStr;

    fn request(name: &str, record_type: RecordType) -> Message {
        let mut message = Message::new();
        message
            .set_id(0xBEEF)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(Name::from_str(name).unwrap(), record_type));
        message
    }

    #[test]
    fn test_a_answer() {
        let req = request("a.test.", RecordType::A);
        let bytes = build_address_response(&req, &["127.0.0.1".parse().unwrap()], 0).unwrap();
        let response = Message::from_vec(&bytes).unwrap();

        assert_eq!(response.id(), 0xBEEF);
        assert_eq!(response.message_type(), MessageType::Response);
        assert!(response.recursion_desired());
        assert!(response.recursion_available());
        assert_eq!(response.response_code(), ResponseCode::NoError);
        assert_eq!(response.queries(), req.queries());
        assert_eq!(response.answers().len(), 1);

        let answer = &response.answers()[0];
        assert_eq!(answer.name(), req.queries()[0].name());
        assert_eq!(answer.ttl(), 0);
        match answer.data() {
            RData::A(a) => assert_eq!(a.0, std::net::Ipv4Addr::new(127, 0, 0, 1)),
            other => panic!("expected A record, got {:?}", other),
        }
    }

    #[test]
    fn test_aaaa_answer_uses_configured_ttl() {
        let req = request("six.test.", RecordType::AAAA);
        let bytes = build_address_response(&req, &["2001:db8::1".parse().unwrap()], 300).unwrap();
        let response = Message::from_vec(&bytes).unwrap();

        assert_eq!(response.answers().len(), 1);
        assert_eq!(response.answers()[0].ttl(), 300);
        match response.answers()[0].data() {
            RData::AAAA(aaaa) => assert_eq!(aaaa.0, "2001:db8::1".parse::<std::net::Ipv6Addr>().unwrap()),
            other => panic!("expected AAAA record, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_answer_is_noerror() {
        let req = request("a.test.", RecordType::AAAA);
        let bytes = build_address_response(&req, &[], 0).unwrap();
        let response = Message::from_vec(&bytes).unwrap();

        assert_eq!(response.response_code(), ResponseCode::NoError);
        assert!(response.answers().is_empty());
        assert_eq!(response.queries().len(), 1);
    }

    #[test]
    fn test_nxdomain_answer() {
        let req = request("bad.test.", RecordType::MX);
        let bytes = build_nxdomain_response(&req).unwrap();
        let response = Message::from_vec(&bytes).unwrap();

        assert_eq!(response.id(), 0xBEEF);
        assert_eq!(response.response_code(), ResponseCode::NXDomain);
        assert!(response.answers().is_empty());
        assert!(response.recursion_available());
        assert_eq!(response.queries(), req.queries());
    }

    #[test]
    fn test_only_first_question_is_echoed() {
        let mut req = request("one.test.", RecordType::A);
        req.add_query(Query::query(Name::from_str("two.test.").unwrap(), RecordType::A));

        let bytes = build_nxdomain_response(&req).unwrap();
        let response = Message::from_vec(&bytes).unwrap();

        assert_eq!(response.queries().len(), 1);
        assert_eq!(response.queries()[0].name().to_ascii(), "one.test.");
    }
}

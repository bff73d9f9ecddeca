//! SOA lookup over an explicit DNS exchange.
//!
//! Unlike the other record types, SOA is not asked of the system resolver. A
//! query message is built by hand and sent over UDP to a fixed server, and the
//! answer section is parsed into the seven SOA fields.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use async_trait::async_trait;
use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RData, RecordType as ProtoRecordType};
use tokio::net::UdpSocket;

use super::lookup::RecordLookup;
use super::types::{DnsRecord, RecordType};
use crate::config::MAX_UDP_RESPONSE_SIZE;
use crate::error_handling::LookupError;

/// Queries SOA records from one fixed server.
pub struct SoaLookup {
    server: SocketAddr,
}

impl SoaLookup {
    pub fn new(server: SocketAddr) -> Self {
        Self { server }
    }

    /// Sends `query` and waits for the response carrying the same id.
    ///
    /// Datagrams with another id or that are not responses are discarded.
    async fn exchange(&self, query: &Message) -> Result<Message, LookupError> {
        let bind_addr: SocketAddr = if self.server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(self.server).await?;
        socket.send(&query.to_vec()?).await?;

        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let len = socket.recv(&mut buf).await?;
            let response = Message::from_vec(&buf[..len])?;
            if response.id() == query.id() && response.message_type() == MessageType::Response {
                return Ok(response);
            }
            log::debug!(
                "Discarding DNS message with id {} from {} (expected {})",
                response.id(),
                self.server,
                query.id()
            );
        }
    }
}

/// Builds a recursive SOA query for `domain` with a random id.
pub fn build_soa_query(domain: &str) -> Result<Message, LookupError> {
    let mut name = Name::from_ascii(domain)?;
    name.set_fqdn(true);

    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name, ProtoRecordType::SOA));
    Ok(message)
}

/// Parses the SOA answers of a response.
///
/// Each answer becomes one record reading
/// `"<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>"`.
/// Non-SOA answers are ignored.
pub fn parse_soa_answers(response: &Message) -> Result<Vec<DnsRecord>, LookupError> {
    let code = response.response_code();
    if code != ResponseCode::NoError {
        return Err(LookupError::ResponseCode(code));
    }

    Ok(response
        .answers()
        .iter()
        .filter_map(|answer| match answer.data() {
            Some(RData::SOA(soa)) => Some(DnsRecord::new(
                RecordType::Soa,
                format!(
                    "{} {} {} {} {} {} {}",
                    soa.mname(),
                    soa.rname(),
                    soa.serial(),
                    soa.refresh(),
                    soa.retry(),
                    soa.expire(),
                    soa.minimum()
                ),
            )),
            _ => None,
        })
        .collect())
}

#[async_trait]
impl RecordLookup for SoaLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Soa
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        let query = build_soa_query(domain)?;
        let response = self.exchange(&query).await?;
        parse_soa_answers(&response)
    }
}

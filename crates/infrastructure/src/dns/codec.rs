//! Mapping between the domain record model and hickory's wire types.
//!
//! Lives in one place so the handler never match-arms over record types
//! itself.

use basalt_dns_domain::{
    DomainName, QueryType, RecordData, RecordType, ResolutionStatus, ResourceRecord,
};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, PTR, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use std::str::FromStr;
use tracing::warn;

pub struct RecordCodec;

impl RecordCodec {
    /// Convert an incoming hickory query type to the domain query type.
    ///
    /// Returns `None` for anything this zone cannot serve; the handler
    /// answers those with NotImp.
    pub fn query_type(hickory_type: HickoryRecordType) -> Option<QueryType> {
        match hickory_type {
            HickoryRecordType::A => Some(QueryType::Record(RecordType::A)),
            HickoryRecordType::AAAA => Some(QueryType::Record(RecordType::AAAA)),
            HickoryRecordType::CNAME => Some(QueryType::Record(RecordType::CNAME)),
            HickoryRecordType::TXT => Some(QueryType::Record(RecordType::TXT)),
            HickoryRecordType::NS => Some(QueryType::Record(RecordType::NS)),
            HickoryRecordType::PTR => Some(QueryType::Record(RecordType::PTR)),
            HickoryRecordType::ANY => Some(QueryType::Any),
            _ => None,
        }
    }

    /// Encode a configured record for the wire.
    ///
    /// Names were validated at load, so a rejection here is unexpected;
    /// the record is skipped with a warning rather than failing the whole
    /// response.
    pub fn to_wire(rr: &ResourceRecord) -> Option<Record> {
        let name = wire_name(&rr.name)?;
        let rdata = match &rr.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::Cname(target) => RData::CNAME(CNAME(wire_name(target)?)),
            RecordData::Ns(target) => RData::NS(NS(wire_name(target)?)),
            RecordData::Ptr(target) => RData::PTR(PTR(wire_name(target)?)),
            RecordData::Txt(text) => RData::TXT(TXT::new(vec![text.clone()])),
        };
        Some(Record::from_rdata(name, rr.ttl, rdata))
    }

    /// The response classifier: resolution status → wire response code.
    /// NameExistsNoData is NoError with an empty answer section, not
    /// NXDomain.
    pub fn response_code(status: ResolutionStatus) -> ResponseCode {
        match status {
            ResolutionStatus::Answered | ResolutionStatus::NameExistsNoData => {
                ResponseCode::NoError
            }
            ResolutionStatus::NameNotFound => ResponseCode::NXDomain,
        }
    }
}

fn wire_name(name: &DomainName) -> Option<Name> {
    match Name::from_str(name.as_str()) {
        Ok(name) => Some(name),
        Err(e) => {
            warn!(name = %name, error = %e, "invalid record name skipped");
            None
        }
    }
}

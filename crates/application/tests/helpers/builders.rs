#![allow(dead_code)]
use basalt_dns_application::{Resolver, ZoneIndex};
use basalt_dns_domain::{DomainName, RecordData, RecordEntry, RecordType, ResourceRecord};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_TTL: i64 = 300;

pub fn entry(name: &str, rtype: &str, value: &str) -> RecordEntry {
    RecordEntry {
        name: name.to_string(),
        record_type: rtype.to_string(),
        value: value.to_string(),
        ttl: None,
    }
}

pub fn entry_with_ttl(name: &str, rtype: &str, value: &str, ttl: i64) -> RecordEntry {
    RecordEntry {
        ttl: Some(ttl),
        ..entry(name, rtype, value)
    }
}

pub fn zone(entries: &[RecordEntry]) -> ZoneIndex {
    ZoneIndex::build(entries, DEFAULT_TTL).unwrap()
}

pub fn resolver(entries: &[RecordEntry]) -> Resolver {
    Resolver::new(Arc::new(zone(entries)))
}

/// Build a record the way the zone builder would, for asserting answers.
pub fn record(name: &str, rtype: &str, value: &str, ttl: u32) -> ResourceRecord {
    let rtype = RecordType::from_str(rtype).unwrap();
    ResourceRecord::new(
        DomainName::parse(name).unwrap(),
        RecordData::parse(rtype, value).unwrap(),
        ttl,
    )
}

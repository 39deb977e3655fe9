use crate::config::ConfigError;
use crate::name::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    NS,
    PTR,
}

impl RecordType {
    /// Stable type precedence for ANY responses.
    pub const ANY_ORDER: [RecordType; 6] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::NS,
        RecordType::PTR,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// Record payload, tagged by type so the value is validated exactly once,
/// at zone-build time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(DomainName),
    Txt(String),
    Ns(DomainName),
    Ptr(DomainName),
}

impl RecordData {
    /// Parse and validate a raw config value for the given record type.
    pub fn parse(rtype: RecordType, value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            rtype,
            value: value.to_string(),
            reason,
        };

        match rtype {
            RecordType::A => value
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|e| invalid(e.to_string())),
            RecordType::AAAA => value
                .parse::<Ipv6Addr>()
                .map(RecordData::Aaaa)
                .map_err(|e| invalid(e.to_string())),
            RecordType::CNAME => DomainName::parse(value).map(RecordData::Cname),
            RecordType::NS => DomainName::parse(value).map(RecordData::Ns),
            RecordType::PTR => DomainName::parse(value).map(RecordData::Ptr),
            RecordType::TXT => {
                // Single character-string; the wire format caps it at 255.
                if value.len() > 255 {
                    return Err(invalid("TXT value exceeds 255 octets".to_string()));
                }
                Ok(RecordData::Txt(value.to_string()))
            }
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Cname(name) | RecordData::Ns(name) | RecordData::Ptr(name) => {
                write!(f, "{}", name)
            }
            RecordData::Txt(text) => f.write_str(text),
        }
    }
}

/// A single configured resource record, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub data: RecordData,
    pub ttl: u32,
}

impl ResourceRecord {
    pub fn new(name: DomainName, data: RecordData, ttl: u32) -> Self {
        Self { name, data, ttl }
    }

    pub fn rtype(&self) -> RecordType {
        self.data.record_type()
    }
}

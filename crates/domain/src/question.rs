use crate::name::DomainName;
use crate::record::RecordType;
use std::fmt;

/// Requested type of a query, including the ANY meta-query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Record(RecordType),
    Any,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Record(rtype) => rtype.as_str(),
            QueryType::Any => "ANY",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed DNS question, name already normalized for index lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub qtype: QueryType,
}

impl Question {
    pub fn new(name: &str, qtype: QueryType) -> Self {
        Self {
            name: DomainName::normalize(name),
            qtype,
        }
    }
}

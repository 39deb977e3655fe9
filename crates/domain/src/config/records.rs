use serde::{Deserialize, Serialize};

/// Raw record entry exactly as written in the zone config; validation and
/// typing happen when the zone index is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub value: String,

    /// TTL in seconds; deserialized signed so a negative value surfaces as
    /// a config error instead of a serde type error.
    #[serde(default)]
    pub ttl: Option<i64>,
}

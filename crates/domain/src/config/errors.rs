use crate::record::RecordType;

/// Load-time failures. The zone is all-or-nothing: any malformed entry
/// aborts startup and no partial zone is ever served.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("configuration validation error: {0}")]
    Validation(String),

    #[error("invalid domain name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("unsupported record type '{0}'")]
    UnsupportedType(String),

    #[error("invalid {rtype} value {value:?}: {reason}")]
    InvalidValue {
        rtype: RecordType,
        value: String,
        reason: String,
    },

    #[error("negative TTL {0}")]
    NegativeTtl(i64),

    #[error("record #{index}: {reason}")]
    Record { index: usize, reason: String },
}

impl ConfigError {
    /// Attach the 1-based position of the offending record entry.
    pub fn at_record(self, index: usize) -> ConfigError {
        ConfigError::Record {
            index,
            reason: self.to_string(),
        }
    }
}

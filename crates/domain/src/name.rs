use crate::config::ConfigError;
use std::fmt;
use std::sync::Arc;

/// Fully-qualified domain name, normalized to lowercase with a trailing dot.
///
/// Two constructors with different strictness: [`DomainName::parse`] is the
/// configuration path and rejects malformed names, while
/// [`DomainName::normalize`] is the query path and is total, so any wire
/// question maps to a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(Arc<str>);

impl DomainName {
    /// Validate and normalize a configured FQDN.
    ///
    /// Configured names must already carry the trailing dot; lowercase
    /// normalization happens here so lookups are case-insensitive.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(Self::invalid(input, "empty name"));
        }
        if !name.ends_with('.') {
            return Err(Self::invalid(input, "missing trailing dot"));
        }
        // 253 octets of name plus the trailing dot.
        if name.len() > 254 {
            return Err(Self::invalid(input, "name exceeds 253 octets"));
        }
        if name != "." {
            for label in name[..name.len() - 1].split('.') {
                if label.is_empty() {
                    return Err(Self::invalid(input, "empty label"));
                }
                if label.len() > 63 {
                    return Err(Self::invalid(input, "label exceeds 63 octets"));
                }
                if label.chars().any(|c| c.is_ascii_whitespace()) {
                    return Err(Self::invalid(input, "whitespace in label"));
                }
            }
        }
        Ok(Self(name.to_ascii_lowercase().into()))
    }

    /// Normalize an incoming query name: lowercase, trailing dot appended
    /// when missing. Never fails; nonsense input just never matches.
    pub fn normalize(input: &str) -> Self {
        let mut name = input.trim().to_ascii_lowercase();
        if !name.ends_with('.') {
            name.push('.');
        }
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(name: &str, reason: &'static str) -> ConfigError {
        ConfigError::InvalidName {
            name: name.to_string(),
            reason,
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

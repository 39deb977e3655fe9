//! Basalt DNS Domain Layer
pub mod config;
pub mod name;
pub mod question;
pub mod record;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RecordEntry, ServerConfig};
pub use name::DomainName;
pub use question::{QueryType, Question};
pub use record::{RecordData, RecordType, ResourceRecord};
pub use resolution::{ResolutionResult, ResolutionStatus};

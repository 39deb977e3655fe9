//! Basalt DNS Application Layer
//!
//! The query-resolution engine: an immutable zone index built once at
//! startup, a pure resolver over it, and best-effort additional-record
//! assembly. Nothing here locks, blocks, or fails at query time; the
//! index is shared across concurrent queries as `Arc<ZoneIndex>`.
pub mod additional;
pub mod resolver;
pub mod zone;

pub use resolver::Resolver;
pub use zone::ZoneIndex;

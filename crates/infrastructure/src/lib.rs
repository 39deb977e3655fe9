//! Basalt DNS Infrastructure Layer
//!
//! The wire boundary (hickory-server request handler and record codec)
//! and the atomically swappable zone handle with its reload job.
pub mod dns;
pub mod zone;

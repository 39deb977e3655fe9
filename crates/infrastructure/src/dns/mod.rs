pub mod codec;
pub mod server;

pub use codec::RecordCodec;
pub use server::ZoneRequestHandler;

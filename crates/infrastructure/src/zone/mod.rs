pub mod handle;
pub mod reload;

pub use handle::ZoneHandle;
pub use reload::ZoneReloadJob;

use arc_swap::ArcSwap;
use basalt_dns_application::ZoneIndex;
use std::sync::Arc;

/// Holds the zone snapshot served to queries.
///
/// A reload builds a complete replacement index and swaps it in whole;
/// records are never mutated in place, so readers stay lock-free.
pub struct ZoneHandle {
    current: ArcSwap<ZoneIndex>,
}

impl ZoneHandle {
    pub fn new(zone: ZoneIndex) -> Self {
        Self {
            current: ArcSwap::from_pointee(zone),
        }
    }

    pub fn current(&self) -> Arc<ZoneIndex> {
        self.current.load_full()
    }

    pub fn replace(&self, zone: ZoneIndex) {
        self.current.store(Arc::new(zone));
    }
}

use crate::zone::ZoneHandle;
use basalt_dns_application::ZoneIndex;
use basalt_dns_domain::{CliOverrides, Config, ConfigError};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that re-reads the zone file when its mtime changes and
/// atomically swaps in a freshly built index.
///
/// A file that fails to parse or validate leaves the last good zone in
/// place; the failure is retried on the next tick until the file is fixed.
pub struct ZoneReloadJob {
    handle: Arc<ZoneHandle>,
    config_path: String,
    interval_secs: u64,
    cancel: CancellationToken,
}

impl ZoneReloadJob {
    pub fn new(handle: Arc<ZoneHandle>, config_path: impl Into<String>, interval_secs: u64) -> Self {
        Self {
            handle,
            config_path: config_path.into(),
            interval_secs,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(&self) {
        info!(
            interval_secs = self.interval_secs,
            path = %self.config_path,
            "Starting zone reload job"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        // First tick fires immediately; the zone was just built from this file.
        interval.tick().await;
        let mut last_mtime = self.mtime();

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("Zone reload job stopped");
                    return;
                }
                _ = interval.tick() => {}
            }

            let mtime = self.mtime();
            if mtime.is_none() || mtime == last_mtime {
                continue;
            }

            match self.rebuild() {
                Ok(zone) => {
                    info!(records = zone.len(), path = %self.config_path, "Zone reloaded");
                    self.handle.replace(zone);
                    last_mtime = mtime;
                }
                Err(e) => {
                    error!(error = %e, "Failed to reload zone, keeping last good zone");
                }
            }
        }
    }

    fn mtime(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.config_path)
            .and_then(|m| m.modified())
            .ok()
    }

    fn rebuild(&self) -> Result<ZoneIndex, ConfigError> {
        let config = Config::load(&self.config_path, CliOverrides::default())?;
        ZoneIndex::build(&config.records, config.default_ttl)
    }
}

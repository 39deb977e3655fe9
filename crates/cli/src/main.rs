use basalt_dns_application::ZoneIndex;
use basalt_dns_domain::CliOverrides;
use basalt_dns_infrastructure::dns::ZoneRequestHandler;
use basalt_dns_infrastructure::zone::{ZoneHandle, ZoneReloadJob};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "basalt-dns")]
#[command(version)]
#[command(about = "Basalt DNS - static authoritative DNS server")]
struct Cli {
    /// Path to the YAML zone configuration
    #[arg(short = 'c', long, value_name = "FILE", default_value = "config.yaml")]
    config: String,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// UDP/TCP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind.clone(),
        port: cli.port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(&cli.config, cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Basalt DNS v{}", env!("CARGO_PKG_VERSION"));

    // Fail-fast: any malformed record aborts startup, no partial zone.
    let zone = ZoneIndex::build(&config.records, config.default_ttl)?;
    info!(records = zone.len(), path = %cli.config, "Zone loaded");

    let zones = Arc::new(ZoneHandle::new(zone));

    if config.server.reload_interval_secs > 0 {
        let job = Arc::new(ZoneReloadJob::new(
            zones.clone(),
            cli.config.clone(),
            config.server.reload_interval_secs,
        ));
        job.start();
    }

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let handler = ZoneRequestHandler::new(zones);
    server::start_dns_server(bind_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}

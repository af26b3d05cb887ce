use clap::{Parser, ValueEnum};
use ferrous_lookup_domain::{CliOverrides, RecordType};
use ferrous_lookup_infrastructure::dns::forwarding::DnsForwarder;
use ferrous_lookup_infrastructure::dns::transport::UdpTransport;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod presenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum QueryType {
    A,
    Mx,
}

impl From<QueryType> for RecordType {
    fn from(value: QueryType) -> Self {
        match value {
            QueryType::A => RecordType::A,
            QueryType::Mx => RecordType::MX,
        }
    }
}

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - single-shot DNS query over UDP")]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// Record type to query
    #[arg(short = 't', long = "type", value_enum, default_value = "a")]
    record_type: QueryType,

    /// Resolver IP address
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Resolver port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Send and receive timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let server_addr = config.resolver.socket_addr()?;
    let record_type = RecordType::from(cli.record_type);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        server = %server_addr,
        timeout_ms = config.resolver.timeout_ms,
        "Starting ferrous-lookup"
    );

    let forwarder = DnsForwarder::new(
        Arc::new(UdpTransport::new(server_addr)),
        config.resolver.timeout(),
    );

    let response = forwarder
        .query(&cli.domain, &record_type)
        .await
        .map_err(|e| {
            error!(domain = %cli.domain, kind = ?e.kind(), error = %e, "Lookup failed");
            e
        })?;

    print!("{}", presenter::render(&response, chrono::Local::now()));
    Ok(())
}

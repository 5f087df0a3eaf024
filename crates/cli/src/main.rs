use clap::{Parser, Subcommand};
use dohgate_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dohgate")]
#[command(version)]
#[command(about = "dohgate - DNS proxy with local resolve, blocklists and DNS-over-HTTPS upstreams")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// UDP listen address, host must be an IP literal
    #[arg(short = 'a', long, global = true)]
    address: Option<String>,

    /// Comma separated DoH upstream URLs
    #[arg(short = 'u', long, value_delimiter = ',', global = true)]
    upstreams: Vec<String>,

    /// Domains answered with NXDOMAIN (repeatable or comma separated)
    #[arg(long, value_delimiter = ',', global = true)]
    blocklist: Vec<String>,

    /// Regular expressions matched against the queried domain
    #[arg(long, global = true)]
    blockregex: Vec<String>,

    /// Local answer as name=ip (repeatable)
    #[arg(long, value_parser = parse_resolve_entry, global = true)]
    resolve: Vec<(String, String)>,

    /// Number of UDP reader tasks
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the DNS proxy (default)
    Serve,
}

fn parse_resolve_entry(raw: &str) -> Result<(String, String), String> {
    let (name, ip) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=ip, got \"{}\"", raw))?;

    if name.trim().is_empty() {
        return Err(format!("missing name in \"{}\"", raw));
    }

    Ok((name.trim().to_string(), ip.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    let cli_overrides = CliOverrides {
        listen_address: cli.address,
        workers: cli.workers,
        upstreams: cli.upstreams,
        blocklist: cli.blocklist,
        blockregex: cli.blockregex,
        resolve: cli.resolve,
        log_level: cli.log_level,
    };

    match command {
        Command::Serve => serve(cli.config.as_deref(), cli_overrides).await,
    }
}

async fn serve(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<()> {
    let config = bootstrap::load_config(config_path, cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dohgate v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = config_path.unwrap_or("default"),
        listen_address = %config.server.listen_address,
        upstreams = config.upstream.servers.len(),
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config)?;

    server::start_dns_server(
        config.server.socket_addr()?,
        dns_services.handler,
        config.server.worker_count(),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

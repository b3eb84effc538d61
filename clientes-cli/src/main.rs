//! clientesctl - entry point for the clientes CRUD service
//!
//! Loads database credentials from the environment (and `.env` when
//! present), then serves the REST API over a lazy MySQL pool.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clientes_server::db::create_pool;
use clientes_server::{DbConfig, ServerConfig};

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "clientesctl",
    author,
    version,
    about = "REST API for the clientes resource, backed by MySQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Allow requests from any origin (development only)
    #[arg(long)]
    cors_permissive: bool,

    /// Override DB_MAX_CONNECTIONS for the pool
    #[arg(long)]
    max_connections: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DB_* variables from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let db = DbConfig::from_env();
    let max_connections = args.max_connections.unwrap_or(db.max_connections);

    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.database,
        max_connections,
        "Connecting to MySQL (lazy)"
    );

    // Lazy pool: credential problems surface on first query, not here
    let pool = create_pool(db.connect_options(), max_connections);

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };

    clientes_server::run_server(pool, config).await?;
    Ok(())
}

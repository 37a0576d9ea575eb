use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use attendance_engine::api::{create_router, AppState};
use attendance_engine::config::ConfigLoader;

/// Serves the attendance analysis API.
#[derive(Debug, Parser)]
#[command(name = "attendance-engine", version, about)]
struct Args {
    /// Directory holding pay_rules.yaml and period.yaml
    #[arg(short, long, default_value = "./config/attendance")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "attendance_engine=debug,info"
    } else {
        "attendance_engine=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = ConfigLoader::load(&args.config).map_err(|e| {
        tracing::error!(path = %args.config.display(), error = %e, "Failed to load configuration");
        e
    })?;
    let period = config.period();
    tracing::info!(
        config = %args.config.display(),
        year = period.year,
        month = period.month,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    tracing::info!(addr = %args.addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}

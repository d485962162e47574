//! Company API - in-memory company and employee registry
//!
//! Serves CRUD endpoints for companies and their employees. All state is
//! held in memory and discarded when the process exits.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

use company_api::{
    config::{LogFormat, LogTarget, LoggingConfig},
    create_router, AppConfig, AppState,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("Company API {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    if args.iter().any(|arg| arg == "--print-config") {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    // The guard must be kept alive so buffered file logs get flushed
    let _log_guard = init_logging(&config.logging);

    info!("Company API starting up");
    info!(workers = config.server.workers, "Building runtime");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    let state = AppState::new(config);
    let store = state.store.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!(
        companies = store.len().await,
        "Server stopped, discarding in-memory state"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Initialize the logging/tracing infrastructure
fn init_logging(log_config: &LoggingConfig) -> Option<WorkerGuard> {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_config.level));

    let (file_writer, guard) = match log_config.target {
        LogTarget::Console => (None, None),
        LogTarget::File | LogTarget::Both => {
            let (writer, guard) = create_file_writer(log_config);
            (Some(writer), Some(guard))
        }
    };
    let console = matches!(log_config.target, LogTarget::Console | LogTarget::Both);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console.then(|| format_layer(&log_config.format, std::io::stdout)))
        .with(file_writer.map(|writer| format_layer(&log_config.format, writer)))
        .init();

    guard
}

/// Build a formatting layer for the configured log format
fn format_layer<S, W>(
    format: &LogFormat,
    writer: W,
) -> Box<dyn tracing_subscriber::Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::{fmt, Layer};

    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer)
            .boxed(),
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(log_config: &LoggingConfig) -> (NonBlocking, WorkerGuard) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

fn print_help() {
    println!(
        r#"Company API {}

USAGE:
    company-api [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --print-config          Print the effective configuration as YAML and exit

ENVIRONMENT:
    COMPANY_API_CONFIG      Path to configuration file (default: config.yaml)
    COMPANY_API_HOST        Listen address (default: 127.0.0.1)
    COMPANY_API_PORT        Listen port (default: 5000)
    COMPANY_API_WORKERS     Runtime worker threads (default: CPU count)
    COMPANY_API_LOG_LEVEL   Log filter directive (default: info)
    COMPANY_API_LOG_FORMAT  pretty, compact or json
    RUST_LOG                Overrides the configured log filter

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by COMPANY_API_CONFIG environment variable
    2. ./config.yaml
    3. ./config/config.yaml
    4. /etc/company-api/config.yaml
    5. <user config dir>/company-api/config.yaml"#,
        env!("CARGO_PKG_VERSION")
    );
}

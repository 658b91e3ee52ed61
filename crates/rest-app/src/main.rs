use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sun2000_rest::{connect_device, router, AccessPipeline, ApiKeys, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = parse_config_arg();
    let config = ServiceConfig::load_with_path(config_path).context("load config failed")?;
    config.validate().context("config validation failed")?;
    init_tracing(&config.log_level);

    info!("initializing REST interface for SUN2000 inverter");
    info!(
        host = %config.inverter.host,
        port = config.inverter.port,
        unit_id = config.inverter.unit_id,
        "inverter will be contacted"
    );
    info!(level = %config.log_level, "log level set");

    if let Some(addr) = config.metrics_addr.as_deref() {
        install_metrics_exporter(addr)?;
    }

    let device = match connect_device(config.inverter.clone()).await {
        Ok(device) => device,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        AccessPipeline::new(device),
        ApiKeys::new(config.accepted_api_keys.iter().cloned()),
    ));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(address = %listener.local_addr()?, "ready to accept requests");
    notify_ready();

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("http server stopped");
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn install_metrics_exporter(addr: &str) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid metrics address {addr}"))?;
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("metrics exporter init failed")?;
    info!(address = %addr, "prometheus exporter listening");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler failed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

fn parse_config_arg() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}

#[cfg(target_os = "linux")]
fn notify_ready() {
    if let Err(err) = sd_notify::notify(true, &[sd_notify::NotifyState::Ready]) {
        warn!(error = %err, "systemd ready notify failed");
    }
}

#[cfg(not(target_os = "linux"))]
fn notify_ready() {}

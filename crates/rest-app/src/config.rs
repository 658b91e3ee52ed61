use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use modbus_client::ClientConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub listen_addr: String,
    /// Prometheus exporter address; no exporter when unset.
    pub metrics_addr: Option<String>,
    pub inverter: ClientConfig,
    pub accepted_api_keys: Vec<String>,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(config_path: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file_config) = load_file_config(config_path.as_deref())? {
            apply_file_config(&mut config, file_config);
        }

        apply_env_overrides(&mut config)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.inverter.host.trim().is_empty() {
            anyhow::bail!("inverter.host must be set (INVERTER_HOST)");
        }
        if self.inverter.port == 0 {
            anyhow::bail!("inverter.port must be between 1 and 65535");
        }
        if self.inverter.connect_timeout_ms == 0 {
            anyhow::bail!("inverter.connect_timeout_ms must be >= 1");
        }
        if self.inverter.timeout_ms == 0 {
            anyhow::bail!("inverter.timeout_ms must be >= 1");
        }
        if self.inverter.retry_backoff_ms == 0 {
            anyhow::bail!("inverter.retry_backoff_ms must be >= 1");
        }
        if self.accepted_api_keys.is_empty() {
            anyhow::bail!("auth.accepted_api_keys must contain at least one key (ACCEPTED_API_KEYS)");
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!("logging.level must be one of {}", LOG_LEVELS.join(", "));
        }
        self.listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("server.listen_addr {} is not a socket address", self.listen_addr))?;
        if let Some(ref addr) = self.metrics_addr {
            addr.parse::<SocketAddr>()
                .with_context(|| format!("server.metrics_addr {addr} is not a socket address"))?;
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            metrics_addr: None,
            inverter: ClientConfig::default(),
            accepted_api_keys: Vec::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn apply_env_overrides(config: &mut ServiceConfig) -> Result<()> {
    if let Ok(value) = env::var("INVERTER_HOST") {
        config.inverter.host = value;
    }
    if let Some(port) = parse_env("INVERTER_PORT")? {
        config.inverter.port = port;
    }
    if let Some(unit_id) = parse_env("INVERTER_UNIT_ID")? {
        config.inverter.unit_id = unit_id;
    }
    if let Some(timeout_ms) = parse_env("INVERTER_TIMEOUT_MS")? {
        config.inverter.timeout_ms = timeout_ms;
    }
    if let Ok(value) = env::var("ACCEPTED_API_KEYS") {
        config.accepted_api_keys = parse_api_keys(&value);
    }
    if let Ok(value) = env::var("LOG_LEVEL") {
        config.log_level = normalize_log_level(&value);
    }
    if let Ok(value) = env::var("SUN2000_REST_LISTEN") {
        config.listen_addr = value;
    }
    config.metrics_addr = env::var("SUN2000_REST_METRICS_LISTEN")
        .ok()
        .or(config.metrics_addr.take());
    Ok(())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    server: Option<FileServerConfig>,
    inverter: Option<FileInverterConfig>,
    auth: Option<FileAuthConfig>,
    logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize)]
struct FileServerConfig {
    listen_addr: Option<String>,
    metrics_addr: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileInverterConfig {
    host: Option<String>,
    port: Option<u16>,
    unit_id: Option<u8>,
    connect_timeout_ms: Option<u64>,
    timeout_ms: Option<u64>,
    retry_count: Option<usize>,
    retry_backoff_ms: Option<u64>,
    retry_max_backoff_ms: Option<u64>,
    settle_delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FileAuthConfig {
    accepted_api_keys: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct FileLoggingConfig {
    level: Option<String>,
}

fn load_file_config(config_path: Option<&str>) -> Result<Option<FileConfig>> {
    let path = match config_path {
        Some(path) => path.to_string(),
        None => match env::var("SUN2000_REST_CONFIG") {
            Ok(value) => value,
            Err(_) => return Ok(None),
        },
    };

    let content = fs::read_to_string(&path).with_context(|| format!("read config file {path}"))?;
    let ext = Path::new(&path).extension().and_then(|value| value.to_str());

    let config = match ext {
        Some("json") => serde_json::from_str(&content).context("parse json config")?,
        _ => toml::from_str(&content).context("parse toml config")?,
    };

    Ok(Some(config))
}

fn apply_file_config(config: &mut ServiceConfig, file: FileConfig) {
    if let Some(server) = file.server {
        if let Some(listen_addr) = server.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(metrics_addr) = server.metrics_addr {
            config.metrics_addr = Some(metrics_addr);
        }
    }

    if let Some(inverter) = file.inverter {
        if let Some(host) = inverter.host {
            config.inverter.host = host;
        }
        if let Some(port) = inverter.port {
            config.inverter.port = port;
        }
        if let Some(unit_id) = inverter.unit_id {
            config.inverter.unit_id = unit_id;
        }
        if let Some(timeout_ms) = inverter.connect_timeout_ms {
            config.inverter.connect_timeout_ms = timeout_ms;
        }
        if let Some(timeout_ms) = inverter.timeout_ms {
            config.inverter.timeout_ms = timeout_ms;
        }
        if let Some(retry_count) = inverter.retry_count {
            config.inverter.retry_count = retry_count;
        }
        if let Some(backoff) = inverter.retry_backoff_ms {
            config.inverter.retry_backoff_ms = backoff;
        }
        if let Some(max_backoff) = inverter.retry_max_backoff_ms {
            config.inverter.retry_max_backoff_ms = max_backoff;
        }
        if let Some(delay) = inverter.settle_delay_ms {
            config.inverter.settle_delay_ms = delay;
        }
    }

    if let Some(keys) = file.auth.and_then(|auth| auth.accepted_api_keys) {
        config.accepted_api_keys = keys
            .iter()
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(level) = file.logging.and_then(|logging| logging.level) {
        config.log_level = normalize_log_level(&level);
    }
}

/// Unset is `None`; a value that does not parse is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key}={value} is not a valid number")),
        Err(_) => Ok(None),
    }
}

/// Comma separated list; blanks are dropped.
pub fn parse_api_keys(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts tracing level names as well as the `WARNING`/`CRITICAL` spellings.
pub fn normalize_log_level(value: &str) -> String {
    match value.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}

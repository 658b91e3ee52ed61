use std::cmp::min;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use tokio::net::lookup_host;
use tokio::sync::Mutex;
use tokio::time::{sleep, timeout};
use tokio_modbus::client::tcp;
use tokio_modbus::client::Context;
use tokio_modbus::prelude::{Reader, Slave};
use tracing::{debug, info, warn};
use types::DeviceEndpoint;

/// Connection and request settings for one Modbus TCP device.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Modbus unit (slave) identifier addressed on the link.
    pub unit_id: u8,
    pub connect_timeout_ms: u64,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Number of retries per request after the initial attempt.
    pub retry_count: usize,
    /// Base delay between retries in milliseconds (exponential backoff).
    pub retry_backoff_ms: u64,
    /// Upper bound for retry backoff delay in milliseconds.
    pub retry_max_backoff_ms: u64,
    /// Pause after the TCP session opens; some inverters drop requests sent too early.
    pub settle_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 6607,
            unit_id: 0,
            connect_timeout_ms: 5_000,
            timeout_ms: 5_000,
            retry_count: 2,
            retry_backoff_ms: 100,
            retry_max_backoff_ms: 2_000,
            settle_delay_ms: 2_000,
        }
    }
}

impl ClientConfig {
    pub fn endpoint(&self) -> DeviceEndpoint {
        DeviceEndpoint {
            host: self.host.clone(),
            port: self.port,
            unit_id: self.unit_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot resolve {0}:{1}")]
    InvalidAddress(String, u16),
    #[error("modbus transport error: {0}")]
    Modbus(std::io::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("connect timed out after {timeout_ms}ms")]
    ConnectTimeout { timeout_ms: u64 },
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("device returned {actual} registers, expected {expected}")]
    ShortRead { expected: u16, actual: usize },
}

/// A single Modbus TCP session. Requests are serialized on the inner context.
#[derive(Debug)]
pub struct ModbusClient {
    config: ClientConfig,
    context: Mutex<Context>,
}

impl ModbusClient {
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let addr = resolve(&config.host, config.port).await?;
        let connect = tcp::connect_slave(addr, Slave(config.unit_id));
        let context = match timeout(Duration::from_millis(config.connect_timeout_ms), connect).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ClientError::ConnectTimeout {
                    timeout_ms: config.connect_timeout_ms,
                })
            }
        };
        info!(%addr, unit_id = config.unit_id, "modbus session opened");

        if config.settle_delay_ms > 0 {
            sleep(Duration::from_millis(config.settle_delay_ms)).await;
        }

        Ok(Self {
            config,
            context: Mutex::new(context),
        })
    }

    /// Reads `count` holding registers starting at `start`, retrying transient failures.
    pub async fn read_holding(&self, start: u16, count: u16) -> Result<Vec<u16>, ClientError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut ctx = self.context.lock().await;
        let mut attempts = 0usize;

        loop {
            let request = ctx.read_holding_registers(start, count);
            let error = match timeout(Duration::from_millis(self.config.timeout_ms), request).await {
                Ok(Ok(values)) if values.len() >= usize::from(count) => {
                    debug!(start, count, "modbus read ok");
                    return Ok(values);
                }
                Ok(Ok(values)) => {
                    warn!(start, count, actual = values.len(), "modbus short read");
                    ClientError::ShortRead {
                        expected: count,
                        actual: values.len(),
                    }
                }
                Ok(Err(err)) => {
                    warn!(start, count, error = %err, "modbus read error");
                    ClientError::Modbus(err)
                }
                Err(_) => {
                    warn!(start, count, "modbus read timeout");
                    ClientError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                }
            };

            if attempts >= self.config.retry_count {
                return Err(error);
            }

            let delay_ms = retry_delay_ms(&self.config, attempts);
            attempts += 1;
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

async fn resolve(host: &str, port: u16) -> Result<SocketAddr, ClientError> {
    lookup_host((host, port))
        .await
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| ClientError::InvalidAddress(host.to_string(), port))
}

fn retry_delay_ms(config: &ClientConfig, attempt: usize) -> u64 {
    let base = config.retry_backoff_ms.max(1);
    let shift = u32::try_from(attempt).unwrap_or(u32::MAX);
    let factor = 1u64.checked_shl(shift).unwrap_or(u64::MAX);
    let max = config.retry_max_backoff_ms.max(base);
    min(base.saturating_mul(factor), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_delay_doubles_until_capped() {
        let config = ClientConfig {
            retry_backoff_ms: 100,
            retry_max_backoff_ms: 350,
            ..ClientConfig::default()
        };
        let delays: Vec<u64> = (0..4).map(|attempt| retry_delay_ms(&config, attempt)).collect();
        assert_eq!(delays, vec![100, 200, 350, 350]);
    }

    #[test]
    fn retry_delay_survives_huge_attempt_counts() {
        let config = ClientConfig::default();
        assert_eq!(retry_delay_ms(&config, 200), config.retry_max_backoff_ms);
    }
}

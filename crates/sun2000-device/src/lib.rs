use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use modbus_client::{ClientConfig, ClientError, ModbusClient};
use sun2000_registers::{DecodeError, RegisterDescriptor};
use types::{DeviceEndpoint, RawRegisterValue};

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no connection to {0}")]
    NotConnected(DeviceEndpoint),
    #[error("reading {register} failed: {source}")]
    Transport {
        register: &'static str,
        #[source]
        source: ClientError,
    },
    #[error("decoding {register} failed: {source}")]
    Decode {
        register: &'static str,
        #[source]
        source: DecodeError,
    },
}

/// Source of register readings.
#[async_trait]
pub trait RegisterReader: Send + Sync + 'static {
    /// Unformatted value, shaped by the register's data type.
    async fn read_raw(&self, register: &RegisterDescriptor) -> Result<RawRegisterValue, DeviceError>;

    /// Human-readable value, e.g. the label of a status code.
    async fn read_formatted(&self, register: &RegisterDescriptor) -> Result<String, DeviceError>;
}

/// Modbus TCP link to a SUN2000 inverter. Battery and meter registers are
/// served by the inverter on the same unit.
#[derive(Debug)]
pub struct Sun2000 {
    config: ClientConfig,
    client: RwLock<Option<Arc<ModbusClient>>>,
}

impl Sun2000 {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
        }
    }

    pub fn endpoint(&self) -> DeviceEndpoint {
        self.config.endpoint()
    }

    /// Opens the link. Failures are logged and leave the device disconnected.
    pub async fn connect(&self) {
        if let Err(err) = self.ensure_connected().await {
            warn!(endpoint = %self.endpoint(), error = %err, "inverter connect failed");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.client.read().await.is_some()
    }

    async fn ensure_connected(&self) -> Result<Arc<ModbusClient>, ClientError> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(Arc::clone(client));
        }

        let mut slot = self.client.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        debug!(endpoint = %self.endpoint(), "connecting to inverter");
        let client = Arc::new(ModbusClient::connect(self.config.clone()).await?);
        *slot = Some(Arc::clone(&client));
        info!(endpoint = %self.endpoint(), "inverter connected");
        Ok(client)
    }

    async fn disconnect(&self) {
        if self.client.write().await.take().is_some() {
            info!(endpoint = %self.endpoint(), "inverter link dropped");
        }
    }
}

#[async_trait]
impl RegisterReader for Sun2000 {
    async fn read_raw(&self, register: &RegisterDescriptor) -> Result<RawRegisterValue, DeviceError> {
        let client = self
            .ensure_connected()
            .await
            .map_err(|err| {
                warn!(register = register.name, error = %err, "inverter unreachable");
                DeviceError::NotConnected(self.endpoint())
            })?;

        let words = match client.read_holding(register.address, register.quantity).await {
            Ok(words) => words,
            Err(source) => {
                if matches!(source, ClientError::Io(_) | ClientError::Modbus(_)) {
                    self.disconnect().await;
                }
                return Err(DeviceError::Transport {
                    register: register.name,
                    source,
                });
            }
        };

        register
            .data_type
            .decode(&words)
            .map_err(|source| DeviceError::Decode {
                register: register.name,
                source,
            })
    }

    async fn read_formatted(&self, register: &RegisterDescriptor) -> Result<String, DeviceError> {
        let raw = self.read_raw(register).await?;
        Ok(register.render(&raw))
    }
}

use std::sync::Arc;

use anyhow::Result;
use tracing::error;

use modbus_client::ClientConfig;
use sun2000_device::Sun2000;

pub const CONNECT_FAILED: &str = "Connection to inverter could not be established";

/// Opens the inverter link once. There is no retry; callers abort on error.
pub async fn connect_device(config: ClientConfig) -> Result<Arc<Sun2000>> {
    let device = Arc::new(Sun2000::new(config));
    device.connect().await;
    if !device.is_connected().await {
        error!(endpoint = %device.endpoint(), "{}", CONNECT_FAILED);
        anyhow::bail!(CONNECT_FAILED);
    }
    Ok(device)
}

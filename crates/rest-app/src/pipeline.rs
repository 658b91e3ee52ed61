use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use tracing::debug;

use sun2000_device::RegisterReader;
use sun2000_registers::Equipment;

use crate::error::ApiError;
use crate::format::{format_register, RegisterReadResult};
use crate::validate::{resolve_equipment, resolve_registers};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterListing {
    pub equipment: Equipment,
    pub registers: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterValues {
    pub equipment: Equipment,
    pub registers: Vec<RegisterReadResult>,
}

/// Validation, device reads and formatting behind the HTTP routes.
#[derive(Clone)]
pub struct AccessPipeline {
    reader: Arc<dyn RegisterReader>,
}

impl AccessPipeline {
    pub fn new(reader: Arc<dyn RegisterReader>) -> Self {
        Self { reader }
    }

    pub fn list_registers(&self, equipment: Option<&str>) -> Result<RegisterListing, ApiError> {
        let equipment = resolve_equipment(equipment)?;
        Ok(RegisterListing {
            equipment,
            registers: equipment.register_names(),
        })
    }

    /// Reads the named registers in request order. Any invalid input is
    /// reported before the device is touched; a failed read aborts the request.
    pub async fn read_registers(
        &self,
        equipment: Option<&str>,
        names: Option<&[String]>,
    ) -> Result<RegisterValues, ApiError> {
        let equipment = resolve_equipment(equipment)?;
        let registers = resolve_registers(equipment, names.unwrap_or_default())?;

        let mut results = Vec::with_capacity(registers.len());
        for register in registers {
            let descriptor = register.descriptor();
            debug!(%equipment, register = descriptor.name, "reading register");
            counter!("sun2000_rest_register_reads_total", "equipment" => equipment.as_str())
                .increment(1);

            let raw = self.reader.read_raw(descriptor).await;
            let result = match raw {
                Ok(raw) => format_register(descriptor, &raw, self.reader.as_ref()).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(result) => results.push(result),
                Err(source) => {
                    counter!(
                        "sun2000_rest_register_read_failures_total",
                        "equipment" => equipment.as_str()
                    )
                    .increment(1);
                    return Err(ApiError::DeviceRead {
                        register: descriptor.name,
                        source,
                    });
                }
            }
        }

        Ok(RegisterValues {
            equipment,
            registers: results,
        })
    }
}

//! Register catalog of a SUN2000 inverter, its battery and its power meter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod catalog;
mod datatype;
mod descriptor;
pub mod mappings;

pub use catalog::{BatteryRegister, InverterRegister, MeterRegister};
pub use datatype::{DataType, DecodeError, ValueKind};
pub use descriptor::{Mapping, RegisterDescriptor, UNDEFINED_LABEL};

/// Equipment family a register belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Inverter,
    Battery,
    Meter,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown equipment {0:?}")]
pub struct UnknownEquipment(pub String);

impl Equipment {
    pub const ALL: [Equipment; 3] = [Equipment::Inverter, Equipment::Battery, Equipment::Meter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Equipment::Inverter => "inverter",
            Equipment::Battery => "battery",
            Equipment::Meter => "meter",
        }
    }

    /// Every register of this family, in catalog order.
    pub fn registers(self) -> Vec<Register> {
        match self {
            Equipment::Inverter => InverterRegister::ALL
                .iter()
                .copied()
                .map(Register::Inverter)
                .collect(),
            Equipment::Battery => BatteryRegister::ALL
                .iter()
                .copied()
                .map(Register::Battery)
                .collect(),
            Equipment::Meter => MeterRegister::ALL
                .iter()
                .copied()
                .map(Register::Meter)
                .collect(),
        }
    }

    pub fn register_names(self) -> Vec<&'static str> {
        self.registers().into_iter().map(Register::name).collect()
    }

    /// Case-sensitive lookup of a register name within this family.
    pub fn lookup(self, name: &str) -> Option<Register> {
        match self {
            Equipment::Inverter => InverterRegister::from_name(name).map(Register::Inverter),
            Equipment::Battery => BatteryRegister::from_name(name).map(Register::Battery),
            Equipment::Meter => MeterRegister::from_name(name).map(Register::Meter),
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = UnknownEquipment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Equipment::ALL
            .into_iter()
            .find(|equipment| equipment.as_str() == value)
            .ok_or_else(|| UnknownEquipment(value.to_string()))
    }
}

/// A register of any equipment family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Inverter(InverterRegister),
    Battery(BatteryRegister),
    Meter(MeterRegister),
}

impl Register {
    pub fn equipment(self) -> Equipment {
        match self {
            Register::Inverter(_) => Equipment::Inverter,
            Register::Battery(_) => Equipment::Battery,
            Register::Meter(_) => Equipment::Meter,
        }
    }

    pub fn descriptor(self) -> &'static RegisterDescriptor {
        match self {
            Register::Inverter(register) => register.descriptor(),
            Register::Battery(register) => register.descriptor(),
            Register::Meter(register) => register.descriptor(),
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

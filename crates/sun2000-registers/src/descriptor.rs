use types::RawRegisterValue;

use crate::datatype::{DataType, ValueKind};

/// Lookup table from a raw status code to its label.
pub type Mapping = &'static [(i64, &'static str)];

/// Label used when a mapped register reports a code the table does not know.
pub const UNDEFINED_LABEL: &str = "undefined";

/// Static description of one named register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDescriptor {
    pub name: &'static str,
    pub data_type: DataType,
    /// First holding register.
    pub address: u16,
    /// Number of 16-bit registers occupied.
    pub quantity: u16,
    /// Divisor turning the raw integer into the real-world value.
    pub gain: Option<u32>,
    pub unit: Option<&'static str>,
    pub mapping: Option<Mapping>,
}

impl RegisterDescriptor {
    pub fn map_code(&self, code: i64) -> Option<&'static str> {
        self.mapping?
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, label)| *label)
    }

    /// Human-readable rendering: mapped label, or the gain-adjusted value with its unit.
    pub fn render(&self, raw: &RawRegisterValue) -> String {
        if self.mapping.is_some() {
            return raw
                .as_integer()
                .and_then(|code| self.map_code(code))
                .unwrap_or(UNDEFINED_LABEL)
                .to_string();
        }

        let body = match (self.data_type.kind(), raw) {
            (ValueKind::Numeric, RawRegisterValue::Integer(value)) => match self.gain {
                Some(gain) if gain > 1 => format!("{}", *value as f64 / f64::from(gain)),
                _ => value.to_string(),
            },
            _ => raw.to_string(),
        };

        match self.unit {
            Some(unit) => format!("{body} {unit}"),
            None => body,
        }
    }
}

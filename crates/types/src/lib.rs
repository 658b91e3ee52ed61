use std::fmt;

use serde::{Deserialize, Serialize};

/// Register reading as handed out by the device, before it is shaped for a client.
///
/// The variant is dictated by the register's data type: opaque blocks arrive as
/// bytes, numeric registers as integers and everything else as decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawRegisterValue {
    Bytes(Vec<u8>),
    Integer(i64),
    Text(String),
}

impl RawRegisterValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawRegisterValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// Bytes render as lowercase hex without separators, integers in base 10.
impl fmt::Display for RawRegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawRegisterValue::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
            RawRegisterValue::Integer(value) => write!(f, "{value}"),
            RawRegisterValue::Text(value) => f.write_str(value),
        }
    }
}

/// Network location of a Modbus TCP device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEndpoint {
    pub host: String,
    pub port: u16,
    pub unit_id: u8,
}

impl fmt::Display for DeviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (unit {})", self.host, self.port, self.unit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_each_shape() {
        assert_eq!(RawRegisterValue::Bytes(vec![0x00, 0x04, 0xfe, 0x4c]).to_string(), "0004fe4c");
        assert_eq!(RawRegisterValue::Integer(-42).to_string(), "-42");
        assert_eq!(RawRegisterValue::Text("SUN2000".to_string()).to_string(), "SUN2000");
    }

    #[test]
    fn only_integers_expose_a_code() {
        assert_eq!(RawRegisterValue::Integer(512).as_integer(), Some(512));
        assert_eq!(RawRegisterValue::Text("512".to_string()).as_integer(), None);
    }
}

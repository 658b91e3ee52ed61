//! Shaping of raw register values into response objects.

use serde::Serialize;

use sun2000_device::{DeviceError, RegisterReader};
use sun2000_registers::{RegisterDescriptor, ValueKind};
use types::RawRegisterValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
}

/// One register in a `/register-values` response. Optional fields are present
/// exactly when the register's descriptor defines them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReadResult {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Always a string, numbers included.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_value: Option<String>,
}

pub fn classify(descriptor: &RegisterDescriptor, raw: &RawRegisterValue) -> (ValueType, String) {
    match (descriptor.data_type.kind(), raw) {
        (ValueKind::Opaque, RawRegisterValue::Bytes(bytes)) => (ValueType::String, hex::encode(bytes)),
        (ValueKind::Numeric, raw) => (ValueType::Number, raw.to_string()),
        (_, raw) => (ValueType::String, raw.to_string()),
    }
}

/// Builds the result for `raw`. Mapped registers cost a second device read for the label.
pub async fn format_register(
    descriptor: &RegisterDescriptor,
    raw: &RawRegisterValue,
    reader: &dyn RegisterReader,
) -> Result<RegisterReadResult, DeviceError> {
    let (value_type, value) = classify(descriptor, raw);
    let mapped_value = match descriptor.mapping {
        Some(_) => Some(reader.read_formatted(descriptor).await?),
        None => None,
    };

    Ok(RegisterReadResult {
        name: descriptor.name,
        value_type,
        value,
        gain: descriptor.gain,
        unit: descriptor.unit,
        mapped_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use sun2000_registers::{BatteryRegister, InverterRegister, MeterRegister};

    #[derive(Default)]
    struct LabelOnly {
        formatted_reads: AtomicUsize,
    }

    #[async_trait]
    impl RegisterReader for LabelOnly {
        async fn read_raw(&self, register: &RegisterDescriptor) -> Result<RawRegisterValue, DeviceError> {
            panic!("formatter must not re-read raw value of {}", register.name);
        }

        async fn read_formatted(&self, register: &RegisterDescriptor) -> Result<String, DeviceError> {
            self.formatted_reads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("label of {}", register.name))
        }
    }

    #[test]
    fn classification_follows_data_type() {
        let curve = InverterRegister::QUCharacteristicCurve.descriptor();
        assert_eq!(
            classify(curve, &RawRegisterValue::Bytes(vec![0x00, 0x04, 0x03, 0xa2])),
            (ValueType::String, "000403a2".to_string())
        );

        let power = InverterRegister::RatedPower.descriptor();
        assert_eq!(
            classify(power, &RawRegisterValue::Integer(10_000)),
            (ValueType::Number, "10000".to_string())
        );

        let state = InverterRegister::State1.descriptor();
        assert_eq!(
            classify(state, &RawRegisterValue::Text("0000000000000110".to_string())),
            (ValueType::String, "0000000000000110".to_string())
        );
    }

    #[tokio::test]
    async fn optional_fields_follow_the_descriptor() {
        let reader = LabelOnly::default();

        let model = format_register(
            InverterRegister::Model.descriptor(),
            &RawRegisterValue::Text("SUN2000".to_string()),
            &reader,
        )
        .await
        .expect("format model");
        assert_eq!(
            serde_json::to_value(&model).expect("serialize"),
            json!({"name": "Model", "type": "string", "value": "SUN2000"})
        );

        let voltage = format_register(
            MeterRegister::CPhaseVoltage.descriptor(),
            &RawRegisterValue::Integer(2356),
            &reader,
        )
        .await
        .expect("format voltage");
        assert_eq!(
            serde_json::to_value(&voltage).expect("serialize"),
            json!({"name": "CPhaseVoltage", "type": "number", "value": "2356", "gain": 10, "unit": "V"})
        );
        assert_eq!(reader.formatted_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mapped_registers_ask_the_device_for_a_label() {
        let reader = LabelOnly::default();
        let result = format_register(
            BatteryRegister::SwitchToOffGrid.descriptor(),
            &RawRegisterValue::Integer(0),
            &reader,
        )
        .await
        .expect("format mapped register");

        assert_eq!(result.mapped_value.as_deref(), Some("label of SwitchToOffGrid"));
        assert_eq!(result.gain, Some(1));
        assert_eq!(reader.formatted_reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn formatting_is_deterministic() {
        let reader = LabelOnly::default();
        let descriptor = InverterRegister::DeviceStatus.descriptor();
        let raw = RawRegisterValue::Integer(512);

        let first = format_register(descriptor, &raw, &reader).await.expect("first");
        let second = format_register(descriptor, &raw, &reader).await.expect("second");
        assert_eq!(
            serde_json::to_vec(&first).expect("serialize"),
            serde_json::to_vec(&second).expect("serialize")
        );
    }
}

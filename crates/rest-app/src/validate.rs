//! Resolution of client input against the register catalog.

use tracing::debug;

use sun2000_registers::{Equipment, Register};

use crate::error::ApiError;

pub fn resolve_equipment(raw: Option<&str>) -> Result<Equipment, ApiError> {
    debug!(equipment = ?raw, "validating equipment");
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::MissingField("equipment")),
    };
    raw.parse().map_err(|_| ApiError::InvalidValue("equipment"))
}

/// Resolves every name in order, keeping duplicates. Stops at the first unknown name.
pub fn resolve_registers<S: AsRef<str>>(
    equipment: Equipment,
    names: &[S],
) -> Result<Vec<Register>, ApiError> {
    if names.is_empty() {
        return Err(ApiError::MissingField("registers"));
    }

    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            equipment.lookup(name).ok_or_else(|| {
                debug!(%equipment, register = name, "unknown register requested");
                ApiError::InvalidRegister
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sun2000_registers::{BatteryRegister, InverterRegister};

    #[test]
    fn equipment_literals_are_exact() {
        assert_eq!(resolve_equipment(Some("inverter")).ok(), Some(Equipment::Inverter));
        assert_eq!(resolve_equipment(Some("battery")).ok(), Some(Equipment::Battery));
        assert_eq!(resolve_equipment(Some("meter")).ok(), Some(Equipment::Meter));
        assert!(matches!(
            resolve_equipment(Some("METER")),
            Err(ApiError::InvalidValue("equipment"))
        ));
        assert!(matches!(
            resolve_equipment(Some("invalid_equipment")),
            Err(ApiError::InvalidValue("equipment"))
        ));
    }

    #[test]
    fn absent_or_empty_equipment_is_missing() {
        assert!(matches!(resolve_equipment(None), Err(ApiError::MissingField("equipment"))));
        assert!(matches!(resolve_equipment(Some("")), Err(ApiError::MissingField("equipment"))));
    }

    #[test]
    fn registers_keep_order_and_duplicates() {
        let registers =
            resolve_registers(Equipment::Inverter, &["RatedPower", "Model", "RatedPower"])
                .expect("valid names");
        assert_eq!(
            registers,
            vec![
                Register::Inverter(InverterRegister::RatedPower),
                Register::Inverter(InverterRegister::Model),
                Register::Inverter(InverterRegister::RatedPower),
            ]
        );
    }

    #[test]
    fn empty_register_list_is_missing() {
        let names: [&str; 0] = [];
        assert!(matches!(
            resolve_registers(Equipment::Battery, &names),
            Err(ApiError::MissingField("registers"))
        ));
    }

    #[test]
    fn any_unknown_name_fails_the_whole_list() {
        assert!(matches!(
            resolve_registers(Equipment::Inverter, &["Model", "SN", "RunningStatus"]),
            Err(ApiError::InvalidRegister)
        ));
        assert!(matches!(
            resolve_registers(Equipment::Battery, &["nope", "SOC", "also-nope"]),
            Err(ApiError::InvalidRegister)
        ));
        assert_eq!(
            resolve_registers(Equipment::Battery, &["SOC"]).ok(),
            Some(vec![Register::Battery(BatteryRegister::SOC)])
        );
    }
}

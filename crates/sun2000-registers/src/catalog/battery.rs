use crate::mappings::{
    BATTERY_OFF_GRID_VOLTAGE, BATTERY_PRODUCT_MODEL, BATTERY_RUNNING_STATUS,
    BATTERY_SWITCH_TO_OFF_GRID, BATTERY_WORKING_MODE,
};

use super::{optional, register_catalog};

register_catalog! {
    /// Registers of the energy storage system attached to the inverter.
    BatteryRegister {
        RunningStatus: U16 @ 37762 x 1, gain = 1, mapping = BATTERY_RUNNING_STATUS;
        BusVoltage: U16 @ 37763 x 1, gain = 10, unit = "V";
        BusCurrent: I16 @ 37764 x 1, gain = 10, unit = "A";
        ChargeAndDischargePower: I32 @ 37765 x 2, gain = 1, unit = "W";
        SOC: U16 @ 37760 x 1, gain = 10, unit = "%";
        TotalCharge: U32 @ 37780 x 2, gain = 100, unit = "kWh";
        TotalDischarge: U32 @ 37782 x 2, gain = 100, unit = "kWh";
        CurrentDayChargeCapacity: U32 @ 37784 x 2, gain = 100, unit = "kWh";
        CurrentDayDischargeCapacity: U32 @ 37786 x 2, gain = 100, unit = "kWh";
        MaximumChargePower: U32 @ 37046 x 2, gain = 1, unit = "W";
        MaximumDischargePower: U32 @ 37048 x 2, gain = 1, unit = "W";
        RatedCapacity: U32 @ 37758 x 2, gain = 1, unit = "Wh";
        Unit1ProductModel: U16 @ 47000 x 1, gain = 1, mapping = BATTERY_PRODUCT_MODEL;
        Unit1SN: Str @ 37052 x 10;
        Unit1SOC: U16 @ 37004 x 1, gain = 10, unit = "%";
        Unit1RunningStatus: U16 @ 37000 x 1, gain = 1, mapping = BATTERY_RUNNING_STATUS;
        Unit1ChargeAndDischargePower: I32 @ 37001 x 2, gain = 1, unit = "W";
        Unit1BusVoltage: U16 @ 37003 x 1, gain = 10, unit = "V";
        Unit1TotalCharge: U32 @ 37066 x 2, gain = 100, unit = "kWh";
        Unit1TotalDischarge: U32 @ 37068 x 2, gain = 100, unit = "kWh";
        Unit1BatteryTemperature: I16 @ 37022 x 1, gain = 10, unit = "°C";
        Unit1BatteryPack1SN: Str @ 38200 x 10;
        Unit1BatteryPack1SOC: U16 @ 38229 x 1, gain = 10, unit = "%";
        Unit1BatteryPack1TotalCharge: U32 @ 38238 x 2, gain = 100, unit = "kWh";
        Unit1BatteryPack1TotalDischarge: U32 @ 38240 x 2, gain = 100, unit = "kWh";
        Unit1BatteryPack2SN: Str @ 38242 x 10;
        Unit1BatteryPack2SOC: U16 @ 38271 x 1, gain = 10, unit = "%";
        Unit1BatteryPack2TotalCharge: U32 @ 38280 x 2, gain = 100, unit = "kWh";
        Unit1BatteryPack2TotalDischarge: U32 @ 38282 x 2, gain = 100, unit = "kWh";
        Unit1BatteryPack3SN: Str @ 38284 x 10;
        Unit1BatteryPack3SOC: U16 @ 38313 x 1, gain = 10, unit = "%";
        Unit1BatteryPack3TotalCharge: U32 @ 38322 x 2, gain = 100, unit = "kWh";
        Unit1BatteryPack3TotalDischarge: U32 @ 38324 x 2, gain = 100, unit = "kWh";
        WorkingModeSettings: U16 @ 47086 x 1, gain = 1, mapping = BATTERY_WORKING_MODE;
        ChargeFromGridFunction: U16 @ 47087 x 1, gain = 1;
        GridChargeCutoffSOC: U16 @ 47088 x 1, gain = 10, unit = "%";
        MaximumChargingPower: U32 @ 47075 x 2, gain = 1, unit = "W";
        MaximumDischargingPower: U32 @ 47077 x 2, gain = 1, unit = "W";
        ChargingCutoffCapacity: U16 @ 47081 x 1, gain = 10, unit = "%";
        DischargeCutoffCapacity: U16 @ 47082 x 1, gain = 10, unit = "%";
        SwitchToOffGrid: U16 @ 47604 x 1, gain = 1, mapping = BATTERY_SWITCH_TO_OFF_GRID;
        VoltageInIndependentOperation: U16 @ 47605 x 1, gain = 1, mapping = BATTERY_OFF_GRID_VOLTAGE;
    }
}

use crate::mappings::{METER_MODEL_DETECTION, METER_STATUS, METER_TYPE};

use super::{optional, register_catalog};

register_catalog! {
    /// Registers of the power meter wired to the inverter.
    MeterRegister {
        MeterStatus: U16 @ 37100 x 1, gain = 1, mapping = METER_STATUS;
        APhaseVoltage: I32 @ 37101 x 2, gain = 10, unit = "V";
        BPhaseVoltage: I32 @ 37103 x 2, gain = 10, unit = "V";
        CPhaseVoltage: I32 @ 37105 x 2, gain = 10, unit = "V";
        APhaseCurrent: I32 @ 37107 x 2, gain = 100, unit = "A";
        BPhaseCurrent: I32 @ 37109 x 2, gain = 100, unit = "A";
        CPhaseCurrent: I32 @ 37111 x 2, gain = 100, unit = "A";
        ActivePower: I32 @ 37113 x 2, gain = 1, unit = "W";
        ReactivePower: I32 @ 37115 x 2, gain = 1, unit = "var";
        PowerFactor: I16 @ 37117 x 1, gain = 1000;
        GridFrequency: I16 @ 37118 x 1, gain = 100, unit = "Hz";
        PositiveActiveElectricity: I32 @ 37119 x 2, gain = 100, unit = "kWh";
        ReverseActivePower: I32 @ 37121 x 2, gain = 100, unit = "kWh";
        AccumulatedReactivePower: I32 @ 37123 x 2, gain = 100, unit = "kvarh";
        MeterType: U16 @ 37125 x 1, gain = 1, mapping = METER_TYPE;
        ABLineVoltage: I32 @ 37126 x 2, gain = 10, unit = "V";
        BCLineVoltage: I32 @ 37128 x 2, gain = 10, unit = "V";
        CALineVoltage: I32 @ 37130 x 2, gain = 10, unit = "V";
        APhaseActivePower: I32 @ 37132 x 2, gain = 1, unit = "W";
        BPhaseActivePower: I32 @ 37134 x 2, gain = 1, unit = "W";
        CPhaseActivePower: I32 @ 37136 x 2, gain = 1, unit = "W";
        MeterModelDetectionResult: U16 @ 37138 x 1, gain = 1, mapping = METER_MODEL_DETECTION;
    }
}

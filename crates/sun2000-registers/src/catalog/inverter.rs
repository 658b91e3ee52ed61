use crate::mappings::{INVERTER_DEVICE_STATUS, INVERTER_STORAGE_MODE, ON_OFF};

use super::{optional, register_catalog};

register_catalog! {
    /// Registers served by the inverter itself.
    InverterRegister {
        Model: Str @ 30000 x 15;
        SN: Str @ 30015 x 10;
        PN: Str @ 30025 x 10;
        ModelID: U16 @ 30070 x 1, gain = 1;
        NumberOfPVStrings: U16 @ 30071 x 1, gain = 1;
        NumberOfMPPTrackers: U16 @ 30072 x 1, gain = 1;
        RatedPower: U32 @ 30073 x 2, gain = 1000, unit = "kW";
        MaximumActivePower: U32 @ 30075 x 2, gain = 1000, unit = "kW";
        MaximumApparentPower: U32 @ 30077 x 2, gain = 1000, unit = "kVA";
        MaximumReactivePowerFedToTheGrid: I32 @ 30079 x 2, gain = 1000, unit = "kVar";
        MaximumReactivePowerAbsorbedFromTheGrid: I32 @ 30081 x 2, gain = 1000, unit = "kVar";
        State1: Bitfield16 @ 32000 x 1;
        State2: Bitfield16 @ 32002 x 1;
        State3: Bitfield32 @ 32003 x 2;
        Alarm1: Bitfield16 @ 32008 x 1;
        Alarm2: Bitfield16 @ 32009 x 1;
        Alarm3: Bitfield16 @ 32010 x 1;
        PV1Voltage: I16 @ 32016 x 1, gain = 10, unit = "V";
        PV1Current: I16 @ 32017 x 1, gain = 100, unit = "A";
        PV2Voltage: I16 @ 32018 x 1, gain = 10, unit = "V";
        PV2Current: I16 @ 32019 x 1, gain = 100, unit = "A";
        PV3Voltage: I16 @ 32020 x 1, gain = 10, unit = "V";
        PV3Current: I16 @ 32021 x 1, gain = 100, unit = "A";
        PV4Voltage: I16 @ 32022 x 1, gain = 10, unit = "V";
        PV4Current: I16 @ 32023 x 1, gain = 100, unit = "A";
        InputPower: I32 @ 32064 x 2, gain = 1000, unit = "kW";
        LineVoltageBetweenPhasesAAndB: U16 @ 32066 x 1, gain = 10, unit = "V";
        LineVoltageBetweenPhasesBAndC: U16 @ 32067 x 1, gain = 10, unit = "V";
        LineVoltageBetweenPhasesCAndA: U16 @ 32068 x 1, gain = 10, unit = "V";
        PhaseAVoltage: U16 @ 32069 x 1, gain = 10, unit = "V";
        PhaseBVoltage: U16 @ 32070 x 1, gain = 10, unit = "V";
        PhaseCVoltage: U16 @ 32071 x 1, gain = 10, unit = "V";
        PhaseACurrent: I32 @ 32072 x 2, gain = 1000, unit = "A";
        PhaseBCurrent: I32 @ 32074 x 2, gain = 1000, unit = "A";
        PhaseCCurrent: I32 @ 32076 x 2, gain = 1000, unit = "A";
        PeakActivePowerOfCurrentDay: I32 @ 32078 x 2, gain = 1000, unit = "kW";
        ActivePower: I32 @ 32080 x 2, gain = 1000, unit = "kW";
        ReactivePower: I32 @ 32082 x 2, gain = 1000, unit = "kVar";
        PowerFactor: I16 @ 32084 x 1, gain = 1000;
        GridFrequency: U16 @ 32085 x 1, gain = 100, unit = "Hz";
        Efficiency: U16 @ 32086 x 1, gain = 100, unit = "%";
        InternalTemperature: I16 @ 32087 x 1, gain = 10, unit = "°C";
        InsulationResistance: U16 @ 32088 x 1, gain = 1000, unit = "MOhm";
        DeviceStatus: U16 @ 32089 x 1, gain = 1, mapping = INVERTER_DEVICE_STATUS;
        FaultCode: U16 @ 32090 x 1, gain = 1;
        StartupTime: U32 @ 32091 x 2, gain = 1;
        ShutdownTime: U32 @ 32093 x 2, gain = 1;
        AccumulatedEnergyYield: U32 @ 32106 x 2, gain = 100, unit = "kWh";
        DailyEnergyYield: U32 @ 32114 x 2, gain = 100, unit = "kWh";
        StorageWorkingMode: I16 @ 47004 x 1, gain = 1, mapping = INVERTER_STORAGE_MODE;
        ForcibleChargeDischargeEnabled: U16 @ 47083 x 1, gain = 1, mapping = ON_OFF;
        PFUCharacteristicCurve: Multidata @ 42700 x 21;
        CosPhiPPnCharacteristicCurve: Multidata @ 42779 x 21;
        QUCharacteristicCurve: Multidata @ 42800 x 21;
    }
}

//! Code tables for registers that report an enumerated state.

use crate::descriptor::Mapping;

pub const INVERTER_DEVICE_STATUS: Mapping = &[
    (0x0000, "Standby: initializing"),
    (0x0001, "Standby: detecting insulation resistance"),
    (0x0002, "Standby: detecting irradiation"),
    (0x0003, "Standby: grid detecting"),
    (0x0100, "Starting"),
    (0x0200, "On-grid"),
    (0x0201, "Grid connection: power limited"),
    (0x0202, "Grid connection: self-derating"),
    (0x0203, "Off-grid running"),
    (0x0300, "Shutdown: fault"),
    (0x0301, "Shutdown: command"),
    (0x0302, "Shutdown: OVGR"),
    (0x0303, "Shutdown: communication disconnected"),
    (0x0304, "Shutdown: power limited"),
    (0x0305, "Shutdown: manual startup required"),
    (0x0306, "Shutdown: DC switches disconnected"),
    (0x0307, "Shutdown: rapid cutoff"),
    (0x0308, "Shutdown: input underpower"),
    (0x0401, "Grid scheduling: cosphi-P curve"),
    (0x0402, "Grid scheduling: Q-U curve"),
    (0x0403, "Grid scheduling: PF-U curve"),
    (0x0404, "Grid scheduling: dry contact"),
    (0x0405, "Grid scheduling: Q-P curve"),
    (0x0500, "Spot-check ready"),
    (0x0501, "Spot-checking"),
    (0x0600, "Inspecting"),
    (0x0700, "AFCI self check"),
    (0x0800, "I-V scanning"),
    (0x0900, "DC input detection"),
    (0x0A00, "Running: off-grid charging"),
    (0xA000, "Standby: no irradiation"),
];

pub const INVERTER_STORAGE_MODE: Mapping = &[
    (0, "Adaptive"),
    (1, "Fixed charge/discharge"),
    (2, "Maximise self consumption"),
    (3, "Time of use (LG)"),
    (4, "Fully fed to grid"),
    (5, "Time of use (LUNA2000)"),
];

pub const ON_OFF: Mapping = &[(0, "Disabled"), (1, "Enabled")];

pub const BATTERY_RUNNING_STATUS: Mapping = &[
    (0, "offline"),
    (1, "standby"),
    (2, "running"),
    (3, "fault"),
    (4, "sleep mode"),
];

pub const BATTERY_PRODUCT_MODEL: Mapping = &[(0, "None"), (1, "LG-RESU"), (2, "HUAWEI-LUNA2000")];

pub const BATTERY_WORKING_MODE: Mapping = &[
    (0, "None"),
    (1, "Forcible charge/discharge"),
    (2, "Time of use (LG)"),
    (3, "Fixed charge/discharge"),
    (4, "Maximise self consumption"),
    (5, "Fully fed to grid"),
    (6, "Time of use (LUNA2000)"),
];

pub const BATTERY_SWITCH_TO_OFF_GRID: Mapping = &[
    (0, "Switch from grid-tied to off-grid"),
    (1, "Switch from off-grid to grid-tied"),
];

pub const BATTERY_OFF_GRID_VOLTAGE: Mapping = &[(0, "Automatic"), (1, "127 V"), (2, "220 V")];

pub const METER_STATUS: Mapping = &[(0, "offline"), (1, "normal")];

pub const METER_TYPE: Mapping = &[(0, "single-phase"), (1, "three-phase")];

pub const METER_MODEL_DETECTION: Mapping = &[
    (0, "being identified"),
    (1, "the selected model is the same as the actual model of the connected meter"),
    (2, "the selected model is different from the actual model of the connected meter"),
];

//! Per-equipment register tables.
//!
//! Each family is a closed enum generated by [`register_catalog!`]; the variant
//! order is the declaration order reported to clients.

mod battery;
mod inverter;
mod meter;

pub use battery::BatteryRegister;
pub use inverter::InverterRegister;
pub use meter::MeterRegister;

macro_rules! optional {
    () => {
        None
    };
    ($($value:tt)+) => {
        Some($($value)+)
    };
}

macro_rules! register_catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $variant:ident: $data_type:ident @ $address:literal x $quantity:literal
                $(, gain = $gain:literal)?
                $(, unit = $unit:literal)?
                $(, mapping = $mapping:path)?;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            const DESCRIPTORS: &'static [$crate::RegisterDescriptor] = &[
                $(
                    $crate::RegisterDescriptor {
                        name: stringify!($variant),
                        data_type: $crate::DataType::$data_type,
                        address: $address,
                        quantity: $quantity,
                        gain: optional!($($gain)?),
                        unit: optional!($($unit)?),
                        mapping: optional!($($mapping)?),
                    },
                )+
            ];

            pub fn name(self) -> &'static str {
                self.descriptor().name
            }

            pub fn descriptor(self) -> &'static $crate::RegisterDescriptor {
                &Self::DESCRIPTORS[self as usize]
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use {optional, register_catalog};

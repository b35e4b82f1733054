//! Well-known vehicle property registry
//!
//! Static tables keyed by property identifier: the identifiers the observer
//! knows by name, the value shape each one carries, and the enum codes used
//! by the gear and ignition-state properties. Identifier and code values
//! follow the host platform's published encoding.

use crate::types::ValueShape;

/// Vehicle make (opaque text)
pub const INFO_MAKE: i32 = 286_261_505;
/// Vehicle model (opaque text)
pub const INFO_MODEL: i32 = 286_261_506;
/// Vehicle model year (int32)
pub const INFO_MODEL_YEAR: i32 = 289_407_235;
/// Odometer in km (float)
pub const PERF_ODOMETER: i32 = 291_504_644;
/// Vehicle speed in m/s (float)
pub const PERF_VEHICLE_SPEED: i32 = 291_504_647;
/// Engine speed in RPM (float)
pub const ENGINE_RPM: i32 = 291_504_901;
/// Fuel level in mL (float)
pub const FUEL_LEVEL: i32 = 291_504_903;
/// EV battery level in Wh (float)
pub const EV_BATTERY_LEVEL: i32 = 291_504_905;
/// EV instantaneous charge rate, raw sensor unit (float)
pub const EV_BATTERY_INSTANTANEOUS_CHARGE_RATE: i32 = 291_504_908;
/// Parking brake engaged (opaque)
pub const PARKING_BRAKE_ON: i32 = 287_310_850;
/// Night mode active (opaque)
pub const NIGHT_MODE: i32 = 287_310_855;
/// Driver-selected gear (int32 enum)
pub const GEAR_SELECTION: i32 = 289_408_000;
/// Actual transmission gear (int32 enum)
pub const CURRENT_GEAR: i32 = 289_408_001;
/// Ignition state (int32 enum)
pub const IGNITION_STATE: i32 = 289_408_009;
/// Per-wheel tick counters plus reset count (5 x int64)
pub const WHEEL_TICK: i32 = 290_521_862;

/// Gear codes used by GEAR_SELECTION and CURRENT_GEAR
///
/// Bit-flag encoding: each gear is its own bit, not a running index.
pub mod gear {
    pub const UNKNOWN: i32 = 0x0000;
    pub const NEUTRAL: i32 = 0x0001;
    pub const REVERSE: i32 = 0x0002;
    pub const PARK: i32 = 0x0004;
    pub const DRIVE: i32 = 0x0008;
    pub const FIRST: i32 = 0x0010;
    pub const SECOND: i32 = 0x0020;
    pub const THIRD: i32 = 0x0040;
    pub const FOURTH: i32 = 0x0080;
    pub const FIFTH: i32 = 0x0100;
    pub const SIXTH: i32 = 0x0200;
    pub const SEVENTH: i32 = 0x0400;
    pub const EIGHTH: i32 = 0x0800;
    pub const NINTH: i32 = 0x1000;
}

/// Ignition state codes used by IGNITION_STATE
pub mod ignition {
    pub const UNDEFINED: i32 = 0;
    pub const LOCK: i32 = 1;
    pub const OFF: i32 = 2;
    pub const ACC: i32 = 3;
    pub const ON: i32 = 4;
    pub const START: i32 = 5;
}

/// Look up the display name of a well-known property identifier
///
/// Returns None for identifiers the registry does not know; callers fall
/// back to the bare integer in that case.
pub fn property_name(property_id: i32) -> Option<&'static str> {
    match property_id {
        INFO_MAKE => Some("INFO_MAKE"),
        INFO_MODEL => Some("INFO_MODEL"),
        INFO_MODEL_YEAR => Some("INFO_MODEL_YEAR"),
        PERF_ODOMETER => Some("PERF_ODOMETER"),
        PERF_VEHICLE_SPEED => Some("PERF_VEHICLE_SPEED"),
        ENGINE_RPM => Some("ENGINE_RPM"),
        FUEL_LEVEL => Some("FUEL_LEVEL"),
        EV_BATTERY_LEVEL => Some("EV_BATTERY_LEVEL"),
        EV_BATTERY_INSTANTANEOUS_CHARGE_RATE => {
            Some("EV_BATTERY_INSTANTANEOUS_CHARGE_RATE")
        }
        PARKING_BRAKE_ON => Some("PARKING_BRAKE_ON"),
        NIGHT_MODE => Some("NIGHT_MODE"),
        GEAR_SELECTION => Some("GEAR_SELECTION"),
        CURRENT_GEAR => Some("CURRENT_GEAR"),
        IGNITION_STATE => Some("IGNITION_STATE"),
        WHEEL_TICK => Some("WHEEL_TICK"),
        _ => None,
    }
}

/// Value shape expected for a property identifier
///
/// This is the boundary-resolution table: the feed consults it once per
/// reading to build the correctly shaped PropertyValue, so downstream code
/// never casts. Identifiers the registry does not know carry opaque values.
pub fn expected_shape(property_id: i32) -> ValueShape {
    match property_id {
        PERF_ODOMETER
        | PERF_VEHICLE_SPEED
        | ENGINE_RPM
        | FUEL_LEVEL
        | EV_BATTERY_LEVEL
        | EV_BATTERY_INSTANTANEOUS_CHARGE_RATE => ValueShape::Float,
        INFO_MODEL_YEAR | GEAR_SELECTION | CURRENT_GEAR | IGNITION_STATE => {
            ValueShape::Int32
        }
        WHEEL_TICK => ValueShape::Int64Vec,
        _ => ValueShape::Opaque,
    }
}

//! Property value formatting
//!
//! Pure functions mapping raw property values to human-readable strings.
//! The beautifier dispatches on the property identifier; everything it does
//! not recognize degrades to the value's default stringification. The only
//! error path is a value whose shape does not match its identifier, which the
//! feed boundary normally rules out.

use crate::registry::{self, gear, ignition};
use crate::types::{PropertyError, PropertyValue, Result, ValueShape};

/// Format an instantaneous EV charge rate as a readable power string
///
/// The input is the raw sensor unit reported by the charge-rate property;
/// the conversion to milliwatts is `(1_000_000_000 / raw) * 200`, carried
/// out in f32 like the input. Unit selection walks mW -> W -> kW.
///
/// The thresholds compare the truncated quotient; the displayed value keeps
/// the full-precision quotient. Two distinct computations.
pub fn readable_milliwatts(raw: f32) -> String {
    if raw == 0.0 {
        return "000 mW".to_string();
    }
    let power_mw = (1_000_000_000.0 / raw) * 200.0;
    if (power_mw / 1000.0).trunc() < 1.0 {
        return format!("{} mW", power_mw);
    }
    let power = power_mw / 1000.0;
    if (power / 1000.0).trunc() < 1.0 {
        return format!("{} W", power);
    }
    format!("{} kW", power / 1000.0)
}

/// Resolve a gear code to its literal name
///
/// Total over the 14 known codes; anything else falls back to the decimal
/// form of the code. Unknown codes are not errors.
pub fn gear_label(code: i32) -> String {
    match code {
        gear::UNKNOWN => "GEAR_UNKNOWN".to_string(),
        gear::PARK => "GEAR_PARK".to_string(),
        gear::NEUTRAL => "GEAR_NEUTRAL".to_string(),
        gear::REVERSE => "GEAR_REVERSE".to_string(),
        gear::DRIVE => "GEAR_DRIVE".to_string(),
        gear::FIRST => "GEAR_FIRST".to_string(),
        gear::SECOND => "GEAR_SECOND".to_string(),
        gear::THIRD => "GEAR_THIRD".to_string(),
        gear::FOURTH => "GEAR_FOURTH".to_string(),
        gear::FIFTH => "GEAR_FIFTH".to_string(),
        gear::SIXTH => "GEAR_SIXTH".to_string(),
        gear::SEVENTH => "GEAR_SEVENTH".to_string(),
        gear::EIGHTH => "GEAR_EIGHTH".to_string(),
        gear::NINTH => "GEAR_NINTH".to_string(),
        _ => code.to_string(),
    }
}

/// Resolve an ignition state code to its literal name
///
/// Total over the 6 known codes; unknown codes fall back to decimal form.
pub fn ignition_label(code: i32) -> String {
    match code {
        ignition::ACC => "ACC".to_string(),
        ignition::LOCK => "LOCK".to_string(),
        ignition::OFF => "OFF".to_string(),
        ignition::ON => "ON".to_string(),
        ignition::START => "START".to_string(),
        ignition::UNDEFINED => "UNDEFINED".to_string(),
        _ => code.to_string(),
    }
}

/// Render the 5 wheel-tick counters as a fixed multi-line block
///
/// Order is fixed: reset count, front-left, front-right, rear-right,
/// rear-left. The trailing newline is part of the template.
pub fn wheel_tick_label(ticks: &[i64; 5]) -> String {
    format!(
        "RST : {}\nFL : {}\nFR : {}\nRR : {}\nRL : {}\n",
        ticks[0], ticks[1], ticks[2], ticks[3], ticks[4]
    )
}

/// Format a property value for display, dispatching on the identifier
///
/// Gear, ignition-state and wheel-tick properties get their dedicated
/// formatter; every other identifier renders as the value's default
/// stringification, unchanged.
///
/// # Errors
/// `TypeMismatch` when a dispatched identifier carries a value of the wrong
/// shape. (Unknown identifiers and unknown enum codes are not errors.)
pub fn beautify(property_id: i32, value: &PropertyValue) -> Result<String> {
    match property_id {
        registry::GEAR_SELECTION | registry::CURRENT_GEAR => {
            Ok(gear_label(expect_int32(property_id, value)?))
        }
        registry::IGNITION_STATE => {
            Ok(ignition_label(expect_int32(property_id, value)?))
        }
        registry::WHEEL_TICK => {
            Ok(wheel_tick_label(&expect_wheel_ticks(property_id, value)?))
        }
        _ => Ok(value.to_string()),
    }
}

fn expect_int32(property_id: i32, value: &PropertyValue) -> Result<i32> {
    value.as_i32().ok_or_else(|| PropertyError::TypeMismatch {
        property_id,
        expected: ValueShape::Int32,
        found: value.describe(),
    })
}

fn expect_wheel_ticks(property_id: i32, value: &PropertyValue) -> Result<[i64; 5]> {
    let mismatch = || PropertyError::TypeMismatch {
        property_id,
        expected: ValueShape::Int64Vec,
        found: value.describe(),
    };
    match value {
        PropertyValue::Int64Vec(v) => {
            <[i64; 5]>::try_from(v.as_slice()).map_err(|_| mismatch())
        }
        _ => Err(mismatch()),
    }
}

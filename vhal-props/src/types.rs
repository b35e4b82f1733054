//! Core types for the vehicle property library
//!
//! This module defines the reading/value types the feed emits and the
//! formatters consume. Readings are immutable and ephemeral - the library is
//! stateless and does not track property history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Result type for property operations
pub type Result<T> = std::result::Result<T, PropertyError>;

/// A single vehicle property reading, as delivered by a subscription feed
///
/// This is the Rust counterpart of a host-platform property change event:
/// one property identifier paired with one raw value. The value shape is
/// resolved against the registry at the feed boundary, so a reading never
/// carries a value of the wrong shape for its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyReading {
    /// Timestamp in nanoseconds since epoch
    pub timestamp_ns: u64,
    /// Property identifier (host-platform encoding)
    pub property_id: i32,
    /// Vehicle area the reading applies to (0 = global)
    pub area_id: i32,
    /// Raw property value
    pub value: PropertyValue,
}

impl PropertyReading {
    /// Convert timestamp from nanoseconds to DateTime<Utc>
    pub fn timestamp(&self) -> Timestamp {
        let secs = (self.timestamp_ns / 1_000_000_000) as i64;
        let nsecs = (self.timestamp_ns % 1_000_000_000) as u32;
        DateTime::from_timestamp(secs, nsecs).unwrap_or_else(|| Utc::now())
    }
}

/// Raw property value shapes handled by the formatters
///
/// A tagged union in place of the host platform's untyped property payload.
/// Only these shapes exist: 32-bit floats (rate/level sensors), 32-bit
/// integers (enum-coded states), 64-bit integer sequences (wheel ticks), and
/// opaque text for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// 32-bit integer (gear, ignition state, model year, ...)
    Int32(i32),
    /// Sequence of 64-bit integers (wheel ticks: reset count, FL, FR, RR, RL)
    Int64Vec(Vec<i64>),
    /// 32-bit float (charge rate, speed, fuel level, ...)
    Float(f32),
    /// Opaque value carried by identifiers with no known shape
    Text(String),
}

impl PropertyValue {
    /// The shape of this value
    pub fn shape(&self) -> ValueShape {
        match self {
            PropertyValue::Float(_) => ValueShape::Float,
            PropertyValue::Int32(_) => ValueShape::Int32,
            PropertyValue::Int64Vec(_) => ValueShape::Int64Vec,
            PropertyValue::Text(_) => ValueShape::Opaque,
        }
    }

    /// Short description of the concrete value, used in mismatch errors
    /// (includes the element count for sequences, e.g. "int64[4]")
    pub fn describe(&self) -> String {
        match self {
            PropertyValue::Float(_) => "float".to_string(),
            PropertyValue::Int32(_) => "int32".to_string(),
            PropertyValue::Int64Vec(v) => format!("int64[{}]", v.len()),
            PropertyValue::Text(_) => "text".to_string(),
        }
    }

    /// Get the float payload if this is a Float value
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the integer payload if this is an Int32 value
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            PropertyValue::Int32(v) => Some(*v),
            _ => None,
        }
    }
}

/// Default stringification of a raw value
///
/// This is the fallback rendering for identifiers the beautifier does not
/// dispatch on: the inner value, unchanged.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Int32(v) => write!(f, "{}", v),
            PropertyValue::Int64Vec(v) => write!(f, "{:?}", v),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Value shape expected for a property identifier
///
/// Queried from the registry and resolved once at the feed boundary, so the
/// pure formatters never see a value of the wrong shape without an explicit
/// error having been raised first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// 32-bit float
    Float,
    /// 32-bit integer
    Int32,
    /// Sequence of 64-bit integers
    Int64Vec,
    /// No known shape - carried as opaque text
    Opaque,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueShape::Float => write!(f, "float"),
            ValueShape::Int32 => write!(f, "int32"),
            ValueShape::Int64Vec => write!(f, "int64 sequence"),
            ValueShape::Opaque => write!(f, "opaque"),
        }
    }
}

/// Errors that can occur while reading or formatting properties
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("Failed to parse property log: {0}")]
    LogParseError(String),

    #[error("Type mismatch for property {property_id}: expected {expected}, found {found}")]
    TypeMismatch {
        property_id: i32,
        expected: ValueShape,
        found: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display_is_default_stringification() {
        assert_eq!(format!("{}", PropertyValue::Int32(42)), "42");
        assert_eq!(format!("{}", PropertyValue::Float(21.5)), "21.5");
        assert_eq!(
            format!("{}", PropertyValue::Int64Vec(vec![1, 2, 3])),
            "[1, 2, 3]"
        );
        assert_eq!(
            format!("{}", PropertyValue::Text("hello".to_string())),
            "hello"
        );
    }

    #[test]
    fn test_value_shape_and_describe() {
        assert_eq!(PropertyValue::Float(0.0).shape(), ValueShape::Float);
        assert_eq!(PropertyValue::Int32(0).shape(), ValueShape::Int32);
        assert_eq!(
            PropertyValue::Int64Vec(vec![0; 4]).describe(),
            "int64[4]"
        );
        assert_eq!(PropertyValue::Text(String::new()).shape(), ValueShape::Opaque);
    }

    #[test]
    fn test_reading_timestamp_conversion() {
        let reading = PropertyReading {
            timestamp_ns: 1_500_000_000,
            property_id: 0,
            area_id: 0,
            value: PropertyValue::Int32(0),
        };
        let ts = reading.timestamp();
        assert_eq!(ts.timestamp(), 1);
        assert_eq!(ts.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(PropertyValue::Float(2.5).as_f32(), Some(2.5));
        assert_eq!(PropertyValue::Int32(8).as_i32(), Some(8));
        assert_eq!(PropertyValue::Int32(8).as_f32(), None);
    }
}

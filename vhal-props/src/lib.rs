//! Vehicle Property Library
//!
//! A stateless, reusable library for turning raw vehicle hardware property
//! readings into human-readable strings, with a dedicated readout format for
//! the EV instantaneous charge rate.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on formatting:
//! - Registry of well-known property identifiers, names and value shapes
//! - Pure formatters (charge rate, gear, ignition state, wheel ticks)
//! - Recorded-event feed replaying property logs as reading iterators
//!
//! The library does NOT:
//! - Subscribe to a live vehicle property service (host-platform owned)
//! - Render any UI
//! - Track property history or value changes
//!
//! All higher-level functionality is in the application layer
//! (vhal-props-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use vhal_props::{beautify, registry, JsonlFeed};
//! use std::path::Path;
//!
//! let feed = JsonlFeed::open(Path::new("drive.jsonl")).unwrap();
//! for reading in feed {
//!     match reading {
//!         Ok(reading) => {
//!             let name = registry::property_name(reading.property_id)
//!                 .unwrap_or("(unknown)");
//!             let text = beautify(reading.property_id, &reading.value).unwrap();
//!             println!("{} = {}", name, text);
//!         }
//!         Err(e) => eprintln!("Feed error: {}", e),
//!     }
//! }
//! ```

// Public modules
pub mod feed;
pub mod format;
pub mod registry;
pub mod types;

// Re-export main types for convenience
pub use feed::JsonlFeed;
pub use format::{
    beautify, gear_label, ignition_label, readable_milliwatts, wheel_tick_label,
};
pub use types::{
    PropertyError, PropertyReading, PropertyValue, Result, Timestamp, ValueShape,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: registry and formatter agree on the charge-rate id
        let value = PropertyValue::Float(0.0);
        let text = beautify(
            registry::EV_BATTERY_INSTANTANEOUS_CHARGE_RATE,
            &value,
        )
        .unwrap();
        assert_eq!(text, "0");
        assert_eq!(readable_milliwatts(0.0), "000 mW");
    }
}

//! Radio link protocol primitives for small flight controllers.
//!
//! rotorlink implements the binary framing and field-codec layer of a
//! radio command/telemetry protocol: single-byte port/channel headers,
//! fixed-layout little-endian payloads, and the header+payload packet
//! composition.
//!
//! # Crate Structure
//!
//! - [`wire`] — Packet model: ports, channels, headers, payload codecs

/// Re-export wire types.
pub mod wire {
    pub use rotorlink_wire::*;
}

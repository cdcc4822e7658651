//! Port and channel identifiers.
//!
//! A port selects the logical subsystem a packet addresses on the flight
//! controller; a channel selects a sub-stream within that port. Ports are
//! 4 bits wide, channels 2 bits.

use crate::error::{Result, WireError};

/// Logical subsystem a packet addresses. Fits in 4 bits.
///
/// The assignments follow the device family's wire convention; the gaps
/// (0x1, 0x8–0xC) are unassigned and rejected on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Port {
    /// Text console output from the device.
    Console = 0x0,
    /// Parameter read/write.
    Parameters = 0x2,
    /// Flight setpoints (roll/pitch/yaw/thrust).
    Commander = 0x3,
    /// Memory subsystem access.
    Memory = 0x4,
    /// Telemetry log configuration and data.
    Logging = 0x5,
    /// External position and localization data.
    Localization = 0x6,
    /// Generic setpoint variants.
    Setpoint = 0x7,
    /// Platform services (version, arming).
    Platform = 0xD,
    /// Debug driver access.
    Debug = 0xE,
    /// Link-layer control (ping, echo).
    LinkControl = 0xF,
}

impl Port {
    /// Every assigned port, in ascending wire order.
    pub const ALL: [Port; 10] = [
        Port::Console,
        Port::Parameters,
        Port::Commander,
        Port::Memory,
        Port::Logging,
        Port::Localization,
        Port::Setpoint,
        Port::Platform,
        Port::Debug,
        Port::LinkControl,
    ];

    /// Human-readable name for diagnostics and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Port::Console => "CONSOLE",
            Port::Parameters => "PARAMETERS",
            Port::Commander => "COMMANDER",
            Port::Memory => "MEMORY",
            Port::Logging => "LOGGING",
            Port::Localization => "LOCALIZATION",
            Port::Setpoint => "SETPOINT",
            Port::Platform => "PLATFORM",
            Port::Debug => "DEBUG",
            Port::LinkControl => "LINK_CONTROL",
        }
    }
}

impl TryFrom<u8> for Port {
    type Error = WireError;

    /// Decode a 4-bit port value. Callers must mask to 4 bits first;
    /// values above 0x0F are never assigned.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x0 => Ok(Port::Console),
            0x2 => Ok(Port::Parameters),
            0x3 => Ok(Port::Commander),
            0x4 => Ok(Port::Memory),
            0x5 => Ok(Port::Logging),
            0x6 => Ok(Port::Localization),
            0x7 => Ok(Port::Setpoint),
            0xD => Ok(Port::Platform),
            0xE => Ok(Port::Debug),
            0xF => Ok(Port::LinkControl),
            other => Err(WireError::UnknownPort(other)),
        }
    }
}

/// Sub-stream within a port. Fits in 2 bits.
///
/// All four 2-bit patterns are assigned, so decoding a masked channel
/// value cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Channel {
    /// The default channel.
    #[default]
    Channel0 = 0x0,
    Channel1 = 0x1,
    Channel2 = 0x2,
    Channel3 = 0x3,
}

impl Channel {
    /// Every channel, in ascending wire order.
    pub const ALL: [Channel; 4] = [
        Channel::Channel0,
        Channel::Channel1,
        Channel::Channel2,
        Channel::Channel3,
    ];

    /// Decode the low two bits of a byte. Infallible: every 2-bit pattern
    /// is a valid channel.
    pub fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0x0 => Channel::Channel0,
            0x1 => Channel::Channel1,
            0x2 => Channel::Channel2,
            _ => Channel::Channel3,
        }
    }
}

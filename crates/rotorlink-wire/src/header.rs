//! Single-byte packet header.
//!
//! Wire layout:
//! ```text
//! ┌─────────────┬──────────────┬──────────────┐
//! │ Port (4b)   │ Reserved (2b)│ Channel (2b) │
//! │ bits 7–4    │ bits 3–2     │ bits 1–0     │
//! └─────────────┴──────────────┴──────────────┘
//! ```
//! Reserved bits are written as zero and ignored on decode; they belong to
//! the transfer layer.

use tracing::trace;

use crate::error::Result;
use crate::port::{Channel, Port};

const PORT_MASK: u8 = 0x0F;
const CHANNEL_MASK: u8 = 0x03;

/// Port and channel of a packet, packed into one wire byte.
///
/// Immutable after construction. Built either from semantic fields on the
/// outbound path or decoded from a received byte on the inbound path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacketHeader {
    port: Port,
    channel: Channel,
}

impl PacketHeader {
    /// Create a header from semantic fields.
    pub const fn new(port: Port, channel: Channel) -> Self {
        Self { port, channel }
    }

    /// Create a header on the default channel.
    pub const fn with_port(port: Port) -> Self {
        Self::new(port, Channel::Channel0)
    }

    /// Decode a header from its wire byte.
    ///
    /// Fails with [`WireError::UnknownPort`] if the 4-bit port pattern has
    /// no assigned subsystem. Reserved bits are not validated.
    ///
    /// [`WireError::UnknownPort`]: crate::error::WireError::UnknownPort
    pub fn from_byte(byte: u8) -> Result<Self> {
        let port = Port::try_from((byte >> 4) & PORT_MASK)?;
        let channel = Channel::from_bits(byte & CHANNEL_MASK);
        trace!(byte, ?port, ?channel, "decoded header");
        Ok(Self { port, channel })
    }

    /// Produce the wire byte. Reserved bits are always zero.
    pub fn to_byte(self) -> u8 {
        ((self.port as u8 & PORT_MASK) << 4) | (self.channel as u8 & CHANNEL_MASK)
    }

    /// The port this header addresses.
    pub fn port(self) -> Port {
        self.port
    }

    /// The channel within the port.
    pub fn channel(self) -> Channel {
        self.channel
    }
}

//! Generic header/payload packet composition.
//!
//! Wire format:
//! ```text
//! ┌──────────────┬──────────────────────┐
//! │ Header (1B)  │ Payload (0..N bytes) │
//! └──────────────┴──────────────────────┘
//! ```
//! No length prefix, delimiter, or checksum — the transport owns framing
//! boundaries and delivers one complete buffer per packet.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::Result;
use crate::header::PacketHeader;
use crate::payload::{CommanderPayload, NoPayload, PacketPayload};
use crate::port::{Channel, Port};

/// A packet pairing an optional header with an optional payload.
///
/// Both parts absent is the valid "empty packet" state, produced by
/// decoding an empty buffer. Packets are immutable value objects; all
/// computation happens at construction and serialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet<P> {
    header: Option<PacketHeader>,
    payload: Option<P>,
}

impl<P: PacketPayload> Packet<P> {
    /// Create a packet from already-constructed parts. No parsing.
    pub fn new(header: PacketHeader, payload: P) -> Self {
        Self {
            header: Some(header),
            payload: Some(payload),
        }
    }

    /// The empty packet: no header, no payload, zero wire bytes.
    pub fn empty() -> Self {
        Self {
            header: None,
            payload: None,
        }
    }

    /// Decode a packet from a complete wire buffer.
    ///
    /// An empty buffer yields the empty packet, not an error. Otherwise
    /// the first byte is the header and the remainder is handed to the
    /// kind-specific payload hook (which yields an absent payload for
    /// header-only kinds).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::empty());
        }

        let header = PacketHeader::from_byte(bytes[0])?;
        let payload = P::from_bytes(&bytes[1..])?;
        trace!(
            port = header.port().name(),
            payload_len = bytes.len() - 1,
            "decoded packet"
        );
        Ok(Self {
            header: Some(header),
            payload,
        })
    }

    /// Serialize to wire bytes: header byte (if present) followed by
    /// payload bytes (if present). Never absent; zero-length when both
    /// parts are absent.
    pub fn to_bytes(&self) -> Bytes {
        let payload_bytes = self.payload.as_ref().map(PacketPayload::to_bytes);
        let payload_len = payload_bytes.as_ref().map_or(0, Bytes::len);

        let mut buf = BytesMut::with_capacity(1 + payload_len);
        if let Some(header) = self.header {
            buf.put_u8(header.to_byte());
        }
        if let Some(bytes) = payload_bytes {
            buf.put_slice(&bytes);
        }
        buf.freeze()
    }

    /// The packet header, absent for the empty packet.
    pub fn header(&self) -> Option<PacketHeader> {
        self.header
    }

    /// The typed payload, absent for empty and header-only packets.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

/// A flight-setpoint packet on the commander port.
pub type CommanderPacket = Packet<CommanderPayload>;

impl CommanderPacket {
    /// Build a commander packet from semantic setpoints on the default
    /// channel.
    pub fn commander(roll: f32, pitch: f32, yaw: f32, thrust: u16) -> Self {
        Self::new(
            PacketHeader::with_port(Port::Commander),
            CommanderPayload::new(roll, pitch, yaw, thrust),
        )
    }
}

/// A header-only link-control ping packet.
pub type PingPacket = Packet<NoPayload>;

impl PingPacket {
    /// Build a ping packet on the given channel.
    pub fn ping(channel: Channel) -> Self {
        Self {
            header: Some(PacketHeader::new(Port::LinkControl, channel)),
            payload: None,
        }
    }
}

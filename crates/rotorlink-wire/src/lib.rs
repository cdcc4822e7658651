//! Packet framing and field codecs for the rotorlink radio protocol.
//!
//! Every packet on the radio link is a single header byte followed by a
//! fixed-layout payload:
//! - The header byte multiplexes a 4-bit port (which subsystem on the
//!   flight controller the packet addresses) and a 2-bit channel (a
//!   sub-stream within that port). The two remaining bits are reserved.
//! - Payloads are fixed-width little-endian field layouts specific to each
//!   packet kind. There is no length prefix, delimiter, or checksum; the
//!   radio transport owns framing boundaries and hands this layer one
//!   complete buffer per packet.
//!
//! Everything here is a pure transformation over immutable buffers. No
//! I/O, no shared state — decoded packets are plain value objects that are
//! safe to read from any thread.

pub mod error;
pub mod header;
pub mod packet;
pub mod payload;
pub mod port;

pub use error::{Result, WireError};
pub use header::PacketHeader;
pub use packet::{CommanderPacket, Packet, PingPacket};
pub use payload::{CommanderPayload, NoPayload, PacketPayload, COMMANDER_PAYLOAD_SIZE};
pub use port::{Channel, Port};

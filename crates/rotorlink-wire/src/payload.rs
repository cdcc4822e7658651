//! Packet payload kinds and their fixed byte layouts.
//!
//! Each kind pins its own layout; all multi-byte fields are little-endian,
//! the device family's wire convention.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, WireError};

/// Byte production and consumption for one packet kind.
///
/// `to_bytes` never returns an absent buffer — kinds without payload bytes
/// return an empty one. `from_bytes` is the kind-specific decode hook; it
/// returns `Ok(None)` for kinds that carry no payload.
pub trait PacketPayload: Sized {
    /// Serialize this payload into a freshly allocated buffer.
    fn to_bytes(&self) -> Bytes;

    /// Decode payload bytes following the header byte.
    fn from_bytes(bytes: &[u8]) -> Result<Option<Self>>;
}

/// Commander payload size: three f32 fields plus one u16.
pub const COMMANDER_PAYLOAD_SIZE: usize = 14;

/// Flight setpoints sent to the commander port.
///
/// Wire layout (14 bytes, little-endian):
/// ```text
/// offset  0: roll    f32
/// offset  4: pitch   f32
/// offset  8: yaw     f32
/// offset 12: thrust  u16
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommanderPayload {
    roll: f32,
    pitch: f32,
    yaw: f32,
    thrust: u16,
}

impl CommanderPayload {
    /// Create a payload from semantic setpoints. No validation; any f32
    /// bit pattern is representable on the wire.
    pub const fn new(roll: f32, pitch: f32, yaw: f32, thrust: u16) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            thrust,
        }
    }

    /// Roll setpoint in degrees.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Pitch setpoint in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw rate setpoint in degrees per second.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Thrust as a raw 16-bit motor value.
    pub fn thrust(&self) -> u16 {
        self.thrust
    }
}

impl PacketPayload for CommanderPayload {
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(COMMANDER_PAYLOAD_SIZE);
        buf.put_f32_le(self.roll);
        buf.put_f32_le(self.pitch);
        buf.put_f32_le(self.yaw);
        buf.put_u16_le(self.thrust);
        buf.freeze()
    }

    /// Rejects any buffer that is not exactly 14 bytes. No truncated or
    /// partial decode.
    fn from_bytes(bytes: &[u8]) -> Result<Option<Self>> {
        if bytes.len() != COMMANDER_PAYLOAD_SIZE {
            return Err(WireError::PayloadSize {
                expected: COMMANDER_PAYLOAD_SIZE,
                actual: bytes.len(),
            });
        }

        let mut buf = bytes;
        Ok(Some(Self {
            roll: buf.get_f32_le(),
            pitch: buf.get_f32_le(),
            yaw: buf.get_f32_le(),
            thrust: buf.get_u16_le(),
        }))
    }
}

/// Payload for header-only packet kinds (e.g. link-control ping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoPayload;

impl PacketPayload for NoPayload {
    fn to_bytes(&self) -> Bytes {
        Bytes::new()
    }

    fn from_bytes(_bytes: &[u8]) -> Result<Option<Self>> {
        Ok(None)
    }
}

//! Round-trip properties over the full packet codec.

use proptest::prelude::*;

use rotorlink_wire::{
    Channel, CommanderPacket, CommanderPayload, PacketHeader, PacketPayload, Port,
    COMMANDER_PAYLOAD_SIZE,
};

fn any_port() -> impl Strategy<Value = Port> {
    proptest::sample::select(Port::ALL.to_vec())
}

fn any_channel() -> impl Strategy<Value = Channel> {
    proptest::sample::select(Channel::ALL.to_vec())
}

proptest! {
    #[test]
    fn header_roundtrip(port in any_port(), channel in any_channel()) {
        let header = PacketHeader::new(port, channel);
        let decoded = PacketHeader::from_byte(header.to_byte()).unwrap();
        prop_assert_eq!(decoded, header);
    }

    #[test]
    fn commander_payload_roundtrip_is_bit_identical(
        roll in proptest::num::f32::ANY,
        pitch in proptest::num::f32::ANY,
        yaw in proptest::num::f32::ANY,
        thrust in proptest::num::u16::ANY,
    ) {
        let payload = CommanderPayload::new(roll, pitch, yaw, thrust);
        let decoded = CommanderPayload::from_bytes(&payload.to_bytes())
            .unwrap()
            .unwrap();

        prop_assert_eq!(decoded.roll().to_bits(), roll.to_bits());
        prop_assert_eq!(decoded.pitch().to_bits(), pitch.to_bits());
        prop_assert_eq!(decoded.yaw().to_bits(), yaw.to_bits());
        prop_assert_eq!(decoded.thrust(), thrust);
    }

    #[test]
    fn full_packet_roundtrip(
        channel in any_channel(),
        roll in proptest::num::f32::ANY,
        pitch in proptest::num::f32::ANY,
        yaw in proptest::num::f32::ANY,
        thrust in proptest::num::u16::ANY,
    ) {
        let packet = CommanderPacket::new(
            PacketHeader::new(Port::Commander, channel),
            CommanderPayload::new(roll, pitch, yaw, thrust),
        );
        let wire = packet.to_bytes();

        prop_assert_eq!(wire.len(), 1 + COMMANDER_PAYLOAD_SIZE);
        prop_assert_eq!(wire[0], packet.header().unwrap().to_byte());

        let decoded = CommanderPacket::from_bytes(&wire).unwrap();
        prop_assert_eq!(decoded.header(), packet.header());
        prop_assert_eq!(
            decoded.payload().unwrap().thrust(),
            packet.payload().unwrap().thrust()
        );
        prop_assert_eq!(decoded.to_bytes(), wire);
    }

    #[test]
    fn wrong_length_buffers_never_decode(len in 0usize..64) {
        prop_assume!(len != COMMANDER_PAYLOAD_SIZE);
        let bytes = vec![0u8; len + 1]; // valid header byte 0x00 + wrong payload
        prop_assert!(CommanderPacket::from_bytes(&bytes).is_err());
    }
}

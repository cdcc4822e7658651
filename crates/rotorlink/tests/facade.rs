//! The facade re-exports must be usable end to end without naming the
//! wire crate directly.

use hex_literal::hex;
use rotorlink::wire::{Channel, CommanderPacket, PingPacket, Port};

#[test]
fn commander_packet_through_facade() {
    let packet = CommanderPacket::commander(0.0, 0.0, 0.0, 0x1234);
    let wire = packet.to_bytes();

    assert_eq!(wire.as_ref(), hex!("30 00000000 00000000 00000000 3412"));

    let decoded = CommanderPacket::from_bytes(&wire).unwrap();
    assert_eq!(decoded.header().unwrap().port(), Port::Commander);
    assert_eq!(decoded.payload().unwrap().thrust(), 0x1234);
}

#[test]
fn ping_packet_through_facade() {
    let packet = PingPacket::ping(Channel::Channel3);
    assert_eq!(packet.to_bytes().as_ref(), hex!("f3"));
}

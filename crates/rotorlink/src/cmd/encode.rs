use rotorlink_wire::{Channel, CommanderPacket, CommanderPayload, PacketHeader, Port};

use crate::cmd::EncodeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_raw, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let packet = build_packet(&args);
    let wire = packet.to_bytes();

    match format {
        OutputFormat::Raw => print_raw(&wire),
        _ => println!("{}", hex::encode(&wire)),
    }

    Ok(SUCCESS)
}

fn build_packet(args: &EncodeArgs) -> CommanderPacket {
    // --channel is range-checked by clap, so the mask never truncates.
    let header = PacketHeader::new(Port::Commander, Channel::from_bits(args.channel));
    let payload = CommanderPayload::new(args.roll, args.pitch, args.yaw, args.thrust);
    CommanderPacket::new(header, payload)
}

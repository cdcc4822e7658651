use std::fs;

use rotorlink_wire::CommanderPacket;

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, wire_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_packet, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = resolve_bytes(&args)?;
    let packet =
        CommanderPacket::from_bytes(&bytes).map_err(|err| wire_error("decode failed", err))?;

    print_packet(&packet, format);
    Ok(SUCCESS)
}

fn resolve_bytes(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(input) = &args.hex {
        return parse_hex(input);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(
        USAGE,
        "provide packet bytes as a hex argument or with --file",
    ))
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    hex::decode(&compact)
        .map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}

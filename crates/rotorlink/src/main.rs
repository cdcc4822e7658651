mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogOptions};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rotorlink", version, about = "Radio link packet tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    #[command(flatten)]
    log: LogOptions,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);

    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use rotorlink_wire::{CommanderPacket, Port};

    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "rotorlink",
            "encode",
            "--roll",
            "1.5",
            "--pitch",
            "-2.0",
            "--yaw",
            "0",
            "--thrust",
            "30000",
        ])
        .expect("encode args should parse");

        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_out_of_range_channel() {
        let err = Cli::try_parse_from([
            "rotorlink",
            "encode",
            "--roll",
            "0",
            "--pitch",
            "0",
            "--yaw",
            "0",
            "--thrust",
            "0",
            "--channel",
            "4",
        ])
        .expect_err("channel 4 should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from([
            "rotorlink",
            "decode",
            "f300",
            "--file",
            "/tmp/packet.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_decode_subcommand_with_wire_valid_vector() {
        const VECTOR: &str = "300000000000000000000000003412";

        let cli = Cli::try_parse_from(["rotorlink", "decode", VECTOR])
            .expect("decode args should parse");
        assert!(matches!(cli.command, Command::Decode(_)));

        // The example vector must itself be a decodable commander packet.
        let bytes = hex::decode(VECTOR).expect("vector should be hex");
        let packet = CommanderPacket::from_bytes(&bytes).expect("vector should decode");
        assert_eq!(packet.header().unwrap().port(), Port::Commander);
        assert_eq!(packet.payload().unwrap().thrust(), 0x1234);
    }

    #[test]
    fn log_filter_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "rotorlink",
            "--log-filter",
            "rotorlink_wire=trace",
            "ports",
        ])
        .expect("log filter should parse");

        assert_eq!(cli.log.log_filter, "rotorlink_wire=trace");
    }
}

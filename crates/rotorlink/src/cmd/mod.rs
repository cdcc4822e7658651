use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod ports;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a commander packet from setpoints.
    Encode(EncodeArgs),
    /// Decode a commander packet buffer and print its fields.
    Decode(DecodeArgs),
    /// Print the port assignment table.
    Ports(PortsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Ports(args) => ports::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Roll setpoint in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub roll: f32,
    /// Pitch setpoint in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: f32,
    /// Yaw rate setpoint in degrees per second.
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: f32,
    /// Thrust as a raw 16-bit motor value.
    #[arg(long)]
    pub thrust: u16,
    /// Channel within the commander port (0-3).
    #[arg(long, short = 'c', default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub channel: u8,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Packet bytes as a hex string (whitespace allowed).
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw packet bytes from file.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

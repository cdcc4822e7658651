use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rotorlink_wire::{CommanderPacket, PacketHeader};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct PacketOutput<'a> {
    port: u8,
    port_name: &'a str,
    channel: u8,
    roll: Option<f32>,
    pitch: Option<f32>,
    yaw: Option<f32>,
    thrust: Option<u16>,
    wire_hex: String,
}

pub fn print_packet(packet: &CommanderPacket, format: OutputFormat) {
    let wire = packet.to_bytes();
    let header = packet.header();
    let payload = packet.payload();

    match format {
        OutputFormat::Json => {
            let out = PacketOutput {
                port: header.map_or(0, |h| h.port() as u8),
                port_name: header.map_or("NONE", |h| h.port().name()),
                channel: header.map_or(0, |h| h.channel() as u8),
                roll: payload.map(|p| p.roll()),
                pitch: payload.map(|p| p.pitch()),
                yaw: payload.map(|p| p.yaw()),
                thrust: payload.map(|p| p.thrust()),
                wire_hex: hex::encode(&wire),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "CHANNEL", "ROLL", "PITCH", "YAW", "THRUST"])
                .add_row(vec![
                    header_label(header),
                    header.map_or("-".to_string(), |h| (h.channel() as u8).to_string()),
                    field(payload.map(|p| p.roll())),
                    field(payload.map(|p| p.pitch())),
                    field(payload.map(|p| p.yaw())),
                    field(payload.map(|p| p.thrust())),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "port={} channel={} roll={} pitch={} yaw={} thrust={} wire={}",
                header_label(header),
                header.map_or("-".to_string(), |h| (h.channel() as u8).to_string()),
                field(payload.map(|p| p.roll())),
                field(payload.map(|p| p.pitch())),
                field(payload.map(|p| p.yaw())),
                field(payload.map(|p| p.thrust())),
                hex::encode(&wire)
            );
        }
        OutputFormat::Raw => {
            print_raw(&wire);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn header_label(header: Option<PacketHeader>) -> String {
    header.map_or("-".to_string(), |h| h.port().name().to_string())
}

fn field<T: ToString>(value: Option<T>) -> String {
    value.map_or("-".to_string(), |v| v.to_string())
}

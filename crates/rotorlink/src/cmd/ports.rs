use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rotorlink_wire::Port;
use serde::Serialize;

use crate::cmd::PortsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct PortEntry {
    value: u8,
    name: &'static str,
}

pub fn run(_args: PortsArgs, format: OutputFormat) -> CliResult<i32> {
    let entries: Vec<PortEntry> = Port::ALL
        .iter()
        .map(|port| PortEntry {
            value: *port as u8,
            name: port.name(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
            );
        }
        _ => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["VALUE", "PORT"]);
            for entry in &entries {
                table.add_row(vec![format!("{:#03x}", entry.value), entry.name.to_string()]);
            }
            println!("{table}");
        }
    }

    Ok(SUCCESS)
}

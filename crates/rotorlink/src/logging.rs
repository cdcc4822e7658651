use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Default filter: library decode traces stay quiet unless asked for.
pub const DEFAULT_LOG_FILTER: &str = "rotorlink=info,rotorlink_wire=warn";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct LogOptions {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log filter directives, e.g. `rotorlink_wire=trace`.
    #[arg(
        long,
        value_name = "FILTER",
        env = "ROTORLINK_LOG",
        default_value = DEFAULT_LOG_FILTER,
        global = true
    )]
    pub log_filter: String,
}

pub fn init_logging(options: &LogOptions) {
    let filter = EnvFilter::try_new(&options.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    match options.log_format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

/// Errors that can occur while encoding or decoding wire packets.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// The payload buffer does not match the fixed size for its kind.
    #[error("payload size must be {expected} bytes (got {actual})")]
    PayloadSize { expected: usize, actual: usize },

    /// The header byte carries a port value with no assigned subsystem.
    #[error("unassigned port value {0:#03x} in header byte")]
    UnknownPort(u8),
}

pub type Result<T> = std::result::Result<T, WireError>;

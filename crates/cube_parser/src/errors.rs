//! Parser error types

use thiserror::Error;

/// Closed set of failures a cube message can produce.
///
/// Every decoder reports exactly one of these; errors are never aggregated.
#[repr(u8)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Invalid colour, expected an alias or 6 hex digits")]
    InvalidColour,
    #[error("Invalid position, expected 3 digits 0-9 or 'h'")]
    InvalidPosition,
    #[error("Invalid axis, expected x, y or z")]
    InvalidAxis,
    #[error("Invalid direction, expected '+' or '-'")]
    InvalidDirection,
    #[error("Invalid offset, expected a digit 0-9 or 'h'")]
    InvalidOffset,
}

impl ParseError {
    /// Numeric status reported on the serial diagnostic channel.
    ///
    /// Positions and offsets share code 6.
    pub fn code(&self) -> u8 {
        match self {
            Self::UnknownCommand => 5,
            Self::InvalidPosition | Self::InvalidOffset => 6,
            Self::InvalidColour => 7,
            Self::InvalidAxis => 10,
            Self::InvalidDirection => 11,
        }
    }
}

const CONTROL_NAMES: [&str; 32] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "TAB", "LF", "VT", "FF", "CR", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN",
    "ETB", "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US",
];

/// Format a byte value for human-readable log messages.
///
/// - Printable ASCII: "0x41 ('A')"
/// - Control characters: "0x0A (LF)"
/// - End of message (`None`): "end of message"
pub fn print_char_value(byte: Option<u8>) -> String {
    match byte {
        None => "end of message".to_string(),
        Some(b @ 0x00..=0x1F) => format!("0x{:02X} ({})", b, CONTROL_NAMES[b as usize]),
        Some(b @ 0x20..=0x7E) => format!("0x{:02X} ('{}')", b, b as char),
        Some(0x7F) => "0x7F (DEL)".to_string(),
        Some(b) => format!("0x{:02X}", b),
    }
}

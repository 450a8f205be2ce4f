//! Message driver: case folding, command resolution and decoding.

use crate::{
    CubeCommand, CubeEngine, ParseError, Reader,
    lexer::skip_whitespace,
    registry::resolve_command,
};

/// Message terminator on the wire
pub const TERMINATOR: u8 = b';';

/// Parses one message into a decoded command.
///
/// The message is lower-cased in place. The first `;` ends the message;
/// anything after the last argument is ignored.
pub fn parse_message(message: &mut [u8]) -> Result<CubeCommand, ParseError> {
    message.make_ascii_lowercase();
    let end = message.iter().position(|&b| b == TERMINATOR).unwrap_or(message.len());
    let mut reader = Reader::new(&message[..end]);

    skip_whitespace(&mut reader);
    let descriptor = resolve_command(&mut reader)?;
    skip_whitespace(&mut reader);
    let command = (descriptor.decode)(&mut reader)?;
    skip_whitespace(&mut reader);

    if !reader.is_at_end() {
        log::debug!("Ignoring trailing {:?} after '{}'", String::from_utf8_lossy(reader.rest()), descriptor.name);
    }
    Ok(command)
}

/// Convenience wrapper for text input; the caller's string is left untouched.
pub fn parse_str(message: &str) -> Result<CubeCommand, ParseError> {
    let mut buf = message.as_bytes().to_vec();
    parse_message(&mut buf)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParserStats {
    pub parsed: usize,
    pub failed: usize,
}

/// Parses messages one at a time and optionally runs them on an engine.
#[derive(Debug, Default)]
pub struct CubeParser {
    stats: ParserStats,
}

impl CubeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> ParserStats {
        self.stats
    }

    pub fn parse(&mut self, message: &mut [u8]) -> Result<CubeCommand, ParseError> {
        match parse_message(message) {
            Ok(command) => {
                self.stats.parsed += 1;
                log::debug!("Decoded {:?}", command);
                Ok(command)
            }
            Err(err) => {
                self.stats.failed += 1;
                log::debug!("Rejected message {:?}: {} (code {})", String::from_utf8_lossy(message), err, err.code());
                Err(err)
            }
        }
    }

    /// Parses `message` and, only if it decodes, executes it on `engine`.
    pub fn run(&mut self, message: &mut [u8], engine: &mut dyn CubeEngine) -> Result<CubeCommand, ParseError> {
        let command = self.parse(message)?;
        command.execute(engine);
        Ok(command)
    }
}

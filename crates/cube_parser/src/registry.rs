//! Command registry: verb names mapped to their decoder and engine operation.
//!
//! Lookup is a linear scan in table order and the first match wins.

use crate::{
    CubeCommand, Operation, ParseError, Reader,
    commands::*,
    lexer::{skip_token, skip_whitespace, token_equals_ci},
};

/// Decoder for one verb's argument grammar
pub type DecodeFn = fn(&mut Reader<'_>) -> Result<CubeCommand, ParseError>;

#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub op: Operation,
    pub decode: DecodeFn,
}

impl CommandDescriptor {
    const fn new(name: &'static str, op: Operation, decode: DecodeFn) -> Self {
        Self { name, op, decode }
    }
}

pub static COMMANDS: [CommandDescriptor; 11] = [
    CommandDescriptor::new("all", Operation::All, decode_all),
    CommandDescriptor::new("shift", Operation::Shift, decode_shift),
    CommandDescriptor::new("set", Operation::Set, decode_set),
    CommandDescriptor::new("line", Operation::Line, decode_line),
    CommandDescriptor::new("box", Operation::Box, decode_box),
    CommandDescriptor::new("sphere", Operation::Sphere, decode_sphere),
    CommandDescriptor::new("next", Operation::Next, decode_next),
    CommandDescriptor::new("copyplane", Operation::CopyPlane, decode_copy_plane),
    CommandDescriptor::new("moveplane", Operation::MovePlane, decode_move_plane),
    CommandDescriptor::new("setplane", Operation::SetPlane, decode_set_plane),
    CommandDescriptor::new("help", Operation::Help, decode_help),
];

/// Matches the token under the cursor against the registry and skips it.
pub fn resolve_command(reader: &mut Reader<'_>) -> Result<&'static CommandDescriptor, ParseError> {
    skip_whitespace(reader);
    let descriptor = COMMANDS.iter().find(|cmd| token_equals_ci(cmd.name, reader)).ok_or(ParseError::UnknownCommand)?;
    skip_token(reader);
    Ok(descriptor)
}

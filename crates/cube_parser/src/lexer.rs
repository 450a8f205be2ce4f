//! Lexical primitives shared by the command and argument decoders.

use crate::Reader;

pub const NUL: u8 = 0x00;
pub const SPACE: u8 = b' ';
pub const RBRAC: u8 = b']';

/// Token boundary: NUL, space or closing bracket.
#[inline]
pub fn is_delimiter(byte: u8) -> bool {
    matches!(byte, NUL | SPACE | RBRAC)
}

/// Skips consecutive spaces.
pub fn skip_whitespace(reader: &mut Reader<'_>) {
    while reader.peek(0) == Some(SPACE) {
        reader.advance(1);
    }
}

/// Skips to the next delimiter or the end of the message.
pub fn skip_token(reader: &mut Reader<'_>) {
    while let Some(byte) = reader.peek(0) {
        if is_delimiter(byte) {
            break;
        }
        reader.advance(1);
    }
}

/// Length of the token under the cursor, up to the next delimiter or the end.
pub fn token_len(reader: &Reader<'_>) -> usize {
    let mut len = 0;
    while reader.peek(len).is_some_and(|b| !is_delimiter(b)) {
        len += 1;
    }
    len
}

/// Compares `reference` against the token under the cursor, ignoring ASCII case.
///
/// Both sides end at their first delimiter (the end of the message counts as
/// one), and both must end at the same index. The reader is not moved.
pub fn token_equals_ci(reference: &str, reader: &Reader<'_>) -> bool {
    let reference = reference.as_bytes();
    let mut i = 0;
    loop {
        let expected = reference.get(i).copied().filter(|b| !is_delimiter(*b));
        let found = reader.peek(i).filter(|b| !is_delimiter(*b));
        match (expected, found) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => i += 1,
            _ => return false,
        }
    }
}

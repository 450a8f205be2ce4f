//! Single-token argument decoders: position, offset, axis and direction.
//!
//! Each decoder skips leading spaces, then either consumes its whole token
//! or fails without moving past the whitespace.

use crate::{Axis, Coordinate, Direction, ParseError, Position, Reader, lexer::skip_whitespace, limits::POSITION_DIGITS, print_char_value};

/// Three coordinate characters without separators, mapped to X, Y, Z.
pub fn parse_position(reader: &mut Reader<'_>) -> Result<Position, ParseError> {
    skip_whitespace(reader);

    let mut coords = [Coordinate::default(); POSITION_DIGITS];
    for (i, coord) in coords.iter_mut().enumerate() {
        let byte = reader.peek(i);
        match byte.and_then(Coordinate::from_byte) {
            Some(c) => *coord = c,
            None => {
                log::debug!("Invalid position character {} at index {}", print_char_value(byte), i);
                return Err(ParseError::InvalidPosition);
            }
        }
    }
    reader.advance(POSITION_DIGITS);
    Ok(Position::new(coords[0], coords[1], coords[2]))
}

/// One digit 0-9 or the hidden marker.
pub fn parse_offset(reader: &mut Reader<'_>) -> Result<Coordinate, ParseError> {
    skip_whitespace(reader);
    let byte = reader.peek(0);
    let Some(offset) = byte.and_then(Coordinate::from_byte) else {
        log::debug!("Invalid offset {}", print_char_value(byte));
        return Err(ParseError::InvalidOffset);
    };
    reader.advance(1);
    Ok(offset)
}

pub fn parse_axis(reader: &mut Reader<'_>) -> Result<Axis, ParseError> {
    skip_whitespace(reader);
    let byte = reader.peek(0);
    let Some(axis) = byte.and_then(Axis::from_byte) else {
        log::debug!("Invalid axis {}", print_char_value(byte));
        return Err(ParseError::InvalidAxis);
    };
    reader.advance(1);
    Ok(axis)
}

pub fn parse_direction(reader: &mut Reader<'_>) -> Result<Direction, ParseError> {
    skip_whitespace(reader);
    let byte = reader.peek(0);
    let Some(direction) = byte.and_then(Direction::from_byte) else {
        log::debug!("Invalid direction {}", print_char_value(byte));
        return Err(ParseError::InvalidDirection);
    };
    reader.advance(1);
    Ok(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let mut reader = Reader::new(b" 112 red");
        assert_eq!(parse_position(&mut reader), Ok(Position::at(1, 1, 2)));
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_parse_position_hidden() {
        let mut reader = Reader::new(b"h0h");
        assert_eq!(parse_position(&mut reader), Ok(Position::new(Coordinate::Hidden, Coordinate::At(0), Coordinate::Hidden)));
    }

    #[test]
    fn test_parse_position_rejects_letters_and_short_input() {
        assert_eq!(parse_position(&mut Reader::new(b"9a9")), Err(ParseError::InvalidPosition));
        assert_eq!(parse_position(&mut Reader::new(b"12")), Err(ParseError::InvalidPosition));
        assert_eq!(parse_position(&mut Reader::new(b"1 23")), Err(ParseError::InvalidPosition));
        assert_eq!(parse_position(&mut Reader::new(b"")), Err(ParseError::InvalidPosition));
    }

    #[test]
    fn test_failed_position_leaves_token_in_place() {
        let mut reader = Reader::new(b"  12x");
        assert!(parse_position(&mut reader).is_err());
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset(&mut Reader::new(b"7")), Ok(Coordinate::At(7)));
        assert_eq!(parse_offset(&mut Reader::new(b" h")), Ok(Coordinate::Hidden));
        assert_eq!(parse_offset(&mut Reader::new(b"x")), Err(ParseError::InvalidOffset));
        assert_eq!(parse_offset(&mut Reader::new(b"")), Err(ParseError::InvalidOffset));
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!(parse_axis(&mut Reader::new(b"x")), Ok(Axis::X));
        assert_eq!(parse_axis(&mut Reader::new(b"  y")), Ok(Axis::Y));
        assert_eq!(parse_axis(&mut Reader::new(b"z")), Ok(Axis::Z));
        assert_eq!(parse_axis(&mut Reader::new(b"w")), Err(ParseError::InvalidAxis));
        assert_eq!(parse_axis(&mut Reader::new(b"")), Err(ParseError::InvalidAxis));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction(&mut Reader::new(b"+")), Ok(Direction::Positive));
        assert_eq!(parse_direction(&mut Reader::new(b" -")), Ok(Direction::Negative));
        assert_eq!(parse_direction(&mut Reader::new(b"*")), Err(ParseError::InvalidDirection));
    }
}

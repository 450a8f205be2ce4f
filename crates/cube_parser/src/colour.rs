//! Colour literals: palette aliases and `RRGGBB` hex.
//!
//! A colour is always exactly one token. Aliases are recognised by the token
//! length plus their first and last character only. This keeps the matcher
//! tiny but it is a heuristic: `rxd` reads as RED. The nine aliases are
//! distinct on (first, last, length); adding an alias requires re-checking
//! that, see `test_palette_aliases_are_distinguishable`.

use serde::{Deserialize, Serialize};

use crate::{
    ParseError, Reader,
    lexer::{skip_whitespace, token_len},
    limits::HEX_COLOUR_DIGITS,
    print_char_value,
};

/// 24 bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    pub const ORANGE: Rgb = Rgb::new(0xFF, 0x7F, 0x00);
    pub const PINK: Rgb = Rgb::new(0xFF, 0x14, 0x93);
    pub const PURPLE: Rgb = Rgb::new(0x7F, 0x00, 0xFF);
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourAlias {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl ColourAlias {
    const fn new(name: &'static str, rgb: Rgb) -> Self {
        Self { name, rgb }
    }

    /// First/last character test against a token of `len` bytes under the cursor.
    fn matches(&self, reader: &Reader<'_>, len: usize) -> bool {
        let name = self.name.as_bytes();
        if name.len() != len {
            return false;
        }
        let (Some(first), Some(last)) = (name.first(), name.last()) else {
            return false;
        };
        let same = |offset: usize, expected: &u8| reader.peek(offset).is_some_and(|b| b.eq_ignore_ascii_case(expected));
        same(0, first) && same(name.len() - 1, last)
    }
}

/// Palette aliases, in match order
pub const PALETTE: [ColourAlias; 9] = [
    ColourAlias::new("BLACK", Rgb::BLACK),
    ColourAlias::new("BLUE", Rgb::BLUE),
    ColourAlias::new("GREEN", Rgb::GREEN),
    ColourAlias::new("ORANGE", Rgb::ORANGE),
    ColourAlias::new("PINK", Rgb::PINK),
    ColourAlias::new("PURPLE", Rgb::PURPLE),
    ColourAlias::new("RED", Rgb::RED),
    ColourAlias::new("WHITE", Rgb::WHITE),
    ColourAlias::new("YELLOW", Rgb::YELLOW),
];

#[inline]
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decodes a colour alias or six hex digits.
pub fn parse_colour(reader: &mut Reader<'_>) -> Result<Rgb, ParseError> {
    skip_whitespace(reader);
    let len = token_len(reader);

    if let Some(alias) = PALETTE.iter().find(|alias| alias.matches(reader, len)) {
        reader.advance(len);
        return Ok(alias.rgb);
    }

    let mut channels = [0u8; HEX_COLOUR_DIGITS / 2];
    for (i, channel) in channels.iter_mut().enumerate() {
        let hi = reader.peek(i * 2);
        let lo = reader.peek(i * 2 + 1);
        match (hi.and_then(hex_value), lo.and_then(hex_value)) {
            (Some(h), Some(l)) => *channel = (h << 4) | l,
            (None, _) => {
                log::debug!("Invalid colour digit {}", print_char_value(hi));
                return Err(ParseError::InvalidColour);
            }
            (Some(_), None) => {
                log::debug!("Invalid colour digit {}", print_char_value(lo));
                return Err(ParseError::InvalidColour);
            }
        }
    }
    if len != HEX_COLOUR_DIGITS {
        log::debug!("Colour token is {} bytes long, expected {}", len, HEX_COLOUR_DIGITS);
        return Err(ParseError::InvalidColour);
    }
    reader.advance(HEX_COLOUR_DIGITS);
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(input: &[u8]) -> (Result<Rgb, ParseError>, usize) {
        let mut reader = Reader::new(input);
        let result = parse_colour(&mut reader);
        (result, reader.position())
    }

    #[test]
    fn test_palette_aliases() {
        for alias in PALETTE {
            let input = alias.name.to_ascii_lowercase();
            assert_eq!(colour(input.as_bytes()), (Ok(alias.rgb), alias.name.len()), "alias {}", alias.name);
        }
    }

    #[test]
    fn test_palette_aliases_are_distinguishable() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                let key = |c: &ColourAlias| (c.name.as_bytes()[0], c.name.as_bytes()[c.name.len() - 1], c.name.len());
                assert_ne!(key(a), key(b), "{} and {} cannot be told apart", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_alias_is_matched_on_first_and_last_character() {
        assert_eq!(colour(b"rxd"), (Ok(Rgb::RED), 3));
        assert_eq!(colour(b"pxxxxe"), (Ok(Rgb::PURPLE), 6));
    }

    #[test]
    fn test_blue_and_black_share_first_character() {
        assert_eq!(colour(b"blue"), (Ok(Rgb::BLUE), 4));
        assert_eq!(colour(b"black"), (Ok(Rgb::BLACK), 5));
        assert_eq!(colour(b"pink"), (Ok(Rgb::PINK), 4));
        assert_eq!(colour(b"purple"), (Ok(Rgb::PURPLE), 6));
    }

    #[test]
    fn test_hex_starting_like_an_alias() {
        assert_eq!(colour(b"b00e00"), (Ok(Rgb::new(0xB0, 0x0E, 0x00)), 6));
    }

    #[test]
    fn test_colour_does_not_span_tokens() {
        assert_eq!(colour(b"r d"), (Err(ParseError::InvalidColour), 0));
        assert_eq!(colour(b"r]d"), (Err(ParseError::InvalidColour), 0));
        assert_eq!(colour(b"b  e"), (Err(ParseError::InvalidColour), 0));
        assert_eq!(colour(b"reds"), (Err(ParseError::InvalidColour), 0));
        assert_eq!(colour(b"00ff00ff"), (Err(ParseError::InvalidColour), 0));
        assert_eq!(colour(b"00ff00]"), (Ok(Rgb::GREEN), 6));
        assert_eq!(colour(b"red]"), (Ok(Rgb::RED), 3));
    }

    #[test]
    fn test_hex_colour() {
        assert_eq!(colour(b"00ff00"), (Ok(Rgb::GREEN), 6));
        assert_eq!(colour(b"123abc"), (Ok(Rgb::new(0x12, 0x3A, 0xBC)), 6));
        assert_eq!(colour(b"ABCDEF"), (Ok(Rgb::new(0xAB, 0xCD, 0xEF)), 6));
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        assert_eq!(colour(b"   red"), (Ok(Rgb::RED), 6));
    }

    #[test]
    fn test_invalid_colour() {
        assert_eq!(colour(b"12345").0, Err(ParseError::InvalidColour));
        assert_eq!(colour(b"12345g").0, Err(ParseError::InvalidColour));
        assert_eq!(colour(b"grey").0, Err(ParseError::InvalidColour));
        assert_eq!(colour(b"").0, Err(ParseError::InvalidColour));
    }

    #[test]
    fn test_invalid_colour_consumes_only_whitespace() {
        assert_eq!(colour(b"  zz"), (Err(ParseError::InvalidColour), 2));
    }

    #[test]
    fn test_truncated_alias_at_end_of_message() {
        // "yell" ends before the alias' last character would be read.
        assert_eq!(colour(b"yell").0, Err(ParseError::InvalidColour));
        assert_eq!(colour(b"b").0, Err(ParseError::InvalidColour));
        assert_eq!(colour(b"whit").0, Err(ParseError::InvalidColour));
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Rgb::ORANGE.to_string(), "ff7f00");
    }
}

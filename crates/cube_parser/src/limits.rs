//! Wire-format limits of the cube command language
//!
//! Coordinates travel as a single ASCII digit, which caps every axis of an
//! addressable cube at ten voxels.

/// Maximum number of addressable voxels per axis
pub const MAX_CUBE_SIZE: u8 = 10;

/// Coordinate or offset character meaning "outside the cube"
pub const HIDDEN_MARKER: u8 = b'h';

/// Number of hex digits in an RRGGBB colour literal
pub const HEX_COLOUR_DIGITS: usize = 6;

/// Number of coordinate characters in a position (X, Y, Z)
pub const POSITION_DIGITS: usize = 3;

/// Check if a cube edge length can be fully addressed by the wire format
#[inline]
pub fn is_addressable(size: u8) -> bool {
    size > 0 && size <= MAX_CUBE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_addressable() {
        assert!(is_addressable(4));
        assert!(is_addressable(MAX_CUBE_SIZE));
        assert!(!is_addressable(0));
        assert!(!is_addressable(MAX_CUBE_SIZE + 1));
    }
}

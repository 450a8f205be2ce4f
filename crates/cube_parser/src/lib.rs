//! Cube command parser: decodes short text commands into operations on a 3D LED cube.
//!
//! Parsing is pure: [`parse_message`] turns one message into a [`CubeCommand`].
//! Executing a command is a separate step that drives a [`CubeEngine`].
//!
//! ```
//! use cube_parser::{parse_str, CubeCommand, Rgb};
//!
//! let command = parse_str("all red;").unwrap();
//! assert_eq!(command, CubeCommand::All { colour: Rgb::RED });
//! ```

use serde::{Deserialize, Serialize};

mod reader;
pub use reader::Reader;

pub mod lexer;

mod errors;
pub use errors::{ParseError, print_char_value};

pub mod limits;

mod colour;
pub use colour::{ColourAlias, PALETTE, Rgb, parse_colour};

mod args;
pub use args::{parse_axis, parse_direction, parse_offset, parse_position};

mod commands;
pub use commands::DEFAULT_FILL;

mod registry;
pub use registry::{COMMANDS, CommandDescriptor, DecodeFn, resolve_command};

mod parser;
pub use parser::{CubeParser, ParserStats, TERMINATOR, parse_message, parse_str};

mod engine;
pub use engine::CubeEngine;

mod help;
pub use help::HELP_TEXT;

use limits::{HIDDEN_MARKER, MAX_CUBE_SIZE};

/// A single coordinate or plane offset along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coordinate {
    /// Addressable index, always below [`MAX_CUBE_SIZE`]
    At(u8),
    /// Outside the addressable cube (`h` on the wire)
    Hidden,
}

impl Coordinate {
    /// Decodes one wire character: an ASCII digit or the hidden marker.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte.to_ascii_lowercase() == HIDDEN_MARKER {
            return Some(Self::Hidden);
        }
        let value = byte.checked_sub(b'0')?;
        (value < MAX_CUBE_SIZE).then_some(Self::At(value))
    }

    pub fn index(&self) -> Option<u8> {
        match self {
            Self::At(i) => Some(*i),
            Self::Hidden => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::At(0)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(i) => write!(f, "{i}"),
            Self::Hidden => write!(f, "{}", HIDDEN_MARKER as char),
        }
    }
}

/// A voxel address: X, Y, Z in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl Position {
    pub fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Self {
        Self { x, y, z }
    }

    /// Builds a position from three addressable indices.
    pub fn at(x: u8, y: u8, z: u8) -> Self {
        Self::new(Coordinate::At(x), Coordinate::At(y), Coordinate::At(z))
    }

    pub fn is_hidden(&self) -> bool {
        self.x.is_hidden() || self.y.is_hidden() || self.z.is_hidden()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.x, self.y, self.z)
    }
}

/// Cube axis for shift and plane commands
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_lowercase() {
            b'x' => Some(Self::X),
            b'y' => Some(Self::Y),
            b'z' => Some(Self::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Shift direction along an axis (`+` or `-` on the wire)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Positive),
            b'-' => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Box drawing style (the optional digit after the box colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoxStyle {
    /// Style 0: every voxel inside the box
    #[default]
    Solid,
    /// Style 1: the six faces only
    WallsOnly,
    /// Style 2: the twelve edges only
    EdgesOnly,
    /// Style 3: faces in the primary colour, interior in the fill colour
    WallsFilled,
    /// Style 4: edges in the primary colour, everything else in the fill colour
    EdgesFilled,
    /// Any other digit or the hidden marker, passed through untouched
    Other(Coordinate),
}

impl From<Coordinate> for BoxStyle {
    fn from(value: Coordinate) -> Self {
        match value {
            Coordinate::At(0) => Self::Solid,
            Coordinate::At(1) => Self::WallsOnly,
            Coordinate::At(2) => Self::EdgesOnly,
            Coordinate::At(3) => Self::WallsFilled,
            Coordinate::At(4) => Self::EdgesFilled,
            other => Self::Other(other),
        }
    }
}

/// Engine operation tag carried by every command descriptor
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    All,
    Shift,
    Set,
    Line,
    Box,
    Sphere,
    Next,
    CopyPlane,
    MovePlane,
    SetPlane,
    Help,
}

/// A fully decoded command, ready to be executed against a [`CubeEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeCommand {
    /// `all <colour>` - fill the whole cube
    All { colour: Rgb },
    /// `shift <axis> <direction>` - scroll the cube contents by one voxel
    Shift { axis: Axis, direction: Direction },
    /// `set <pos> <colour>` - set a single voxel
    Set { position: Position, colour: Rgb },
    /// `line <pos1> <pos2> <colour>`
    Line { from: Position, to: Position, colour: Rgb },
    /// `box <pos1> <pos2> <colour> [<style>] [<fill>]`
    Box {
        from: Position,
        to: Position,
        colour: Rgb,
        style: BoxStyle,
        fill: Rgb,
    },
    /// `sphere <pos> <size> <colour> [<fill>]`
    Sphere {
        centre: Position,
        size: Coordinate,
        colour: Rgb,
        fill: Rgb,
    },
    /// `next <colour>` - set the voxel under the cursor and advance it
    Next { colour: Rgb },
    /// `copyplane <axis> <from> <to>`
    CopyPlane { axis: Axis, from: Coordinate, to: Coordinate },
    /// `moveplane <axis> <from> <to> <colour>` - copy, then clear the source with `colour`
    MovePlane {
        axis: Axis,
        from: Coordinate,
        to: Coordinate,
        colour: Rgb,
    },
    /// `setplane <axis> <offset> <colour>`
    SetPlane { axis: Axis, offset: Coordinate, colour: Rgb },
    /// `help` - emit the usage text
    Help,
}

impl CubeCommand {
    pub fn operation(&self) -> Operation {
        match self {
            Self::All { .. } => Operation::All,
            Self::Shift { .. } => Operation::Shift,
            Self::Set { .. } => Operation::Set,
            Self::Line { .. } => Operation::Line,
            Self::Box { .. } => Operation::Box,
            Self::Sphere { .. } => Operation::Sphere,
            Self::Next { .. } => Operation::Next,
            Self::CopyPlane { .. } => Operation::CopyPlane,
            Self::MovePlane { .. } => Operation::MovePlane,
            Self::SetPlane { .. } => Operation::SetPlane,
            Self::Help => Operation::Help,
        }
    }

    /// Invokes exactly one engine primitive (or the text sink for `help`).
    pub fn execute(&self, engine: &mut dyn CubeEngine) {
        match *self {
            Self::All { colour } => engine.all(colour),
            Self::Shift { axis, direction } => engine.shift(axis, direction),
            Self::Set { position, colour } => engine.set(position, colour),
            Self::Line { from, to, colour } => engine.line(from, to, colour),
            Self::Box { from, to, colour, style, fill } => engine.draw_box(from, to, colour, style, fill),
            Self::Sphere { centre, size, colour, fill } => engine.sphere(centre, size, colour, fill),
            Self::Next { colour } => engine.next(colour),
            Self::CopyPlane { axis, from, to } => engine.copy_plane(axis, from, to),
            Self::MovePlane { axis, from, to, colour } => engine.move_plane(axis, from, to, colour),
            Self::SetPlane { axis, offset, colour } => engine.set_plane(axis, offset, colour),
            Self::Help => {
                for line in HELP_TEXT {
                    engine.print(line);
                }
            }
        }
    }
}

use std::io::{self, Write};

use cube_parser::{Axis, BoxStyle, Coordinate, CubeEngine, Direction, Position, Rgb};

/// Engine that writes every primitive call as one text line.
///
/// Coordinates outside a cube of `size` voxels per edge are still traced but
/// reported with `log::warn!`. The engine methods can't fail, so the first
/// write error is kept and handed back by [`TraceEngine::take_error`].
pub struct TraceEngine<W: Write> {
    out: W,
    size: u8,
    calls: usize,
    error: Option<io::Error>,
}

impl<W: Write> TraceEngine<W> {
    pub fn new(out: W, size: u8) -> Self {
        Self {
            out,
            size,
            calls: 0,
            error: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        self.calls += 1;
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
        }
    }

    fn check_coordinate(&self, what: &str, coordinate: Coordinate) {
        if let Coordinate::At(i) = coordinate {
            if i >= self.size {
                log::warn!("{what} {i} is outside a cube of size {}", self.size);
            }
        }
    }

    fn check_position(&self, what: &str, position: Position) {
        self.check_coordinate(what, position.x);
        self.check_coordinate(what, position.y);
        self.check_coordinate(what, position.z);
    }
}

impl<W: Write> CubeEngine for TraceEngine<W> {
    fn all(&mut self, colour: Rgb) {
        self.emit(format_args!("all {colour}"));
    }

    fn shift(&mut self, axis: Axis, direction: Direction) {
        self.emit(format_args!("shift {axis} {direction}"));
    }

    fn set(&mut self, position: Position, colour: Rgb) {
        self.check_position("set", position);
        self.emit(format_args!("set {position} {colour}"));
    }

    fn line(&mut self, from: Position, to: Position, colour: Rgb) {
        self.check_position("line", from);
        self.check_position("line", to);
        self.emit(format_args!("line {from} {to} {colour}"));
    }

    fn draw_box(&mut self, from: Position, to: Position, colour: Rgb, style: BoxStyle, fill: Rgb) {
        self.check_position("box", from);
        self.check_position("box", to);
        self.emit(format_args!("box {from} {to} {colour} {style:?} {fill}"));
    }

    fn sphere(&mut self, centre: Position, size: Coordinate, colour: Rgb, fill: Rgb) {
        self.check_position("sphere", centre);
        self.emit(format_args!("sphere {centre} {size} {colour} {fill}"));
    }

    fn next(&mut self, colour: Rgb) {
        self.emit(format_args!("next {colour}"));
    }

    fn copy_plane(&mut self, axis: Axis, from: Coordinate, to: Coordinate) {
        self.check_coordinate("copyplane", from);
        self.check_coordinate("copyplane", to);
        self.emit(format_args!("copyplane {axis} {from} {to}"));
    }

    fn move_plane(&mut self, axis: Axis, from: Coordinate, to: Coordinate, colour: Rgb) {
        self.check_coordinate("moveplane", from);
        self.check_coordinate("moveplane", to);
        self.emit(format_args!("moveplane {axis} {from} {to} {colour}"));
    }

    fn set_plane(&mut self, axis: Axis, offset: Coordinate, colour: Rgb) {
        self.check_coordinate("setplane", offset);
        self.emit(format_args!("setplane {axis} {offset} {colour}"));
    }

    fn print(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }
}

use crate::{Axis, BoxStyle, Coordinate, Direction, Position, Rgb};

/// LED buffer primitives a decoded [`crate::CubeCommand`] is executed against.
///
/// The parser never implements these; a cube driver, simulator or test
/// double does.
pub trait CubeEngine {
    /// Fill the whole cube
    fn all(&mut self, colour: Rgb);

    /// Scroll the cube contents one voxel along `axis`
    fn shift(&mut self, axis: Axis, direction: Direction);

    fn set(&mut self, position: Position, colour: Rgb);

    fn line(&mut self, from: Position, to: Position, colour: Rgb);

    fn draw_box(&mut self, from: Position, to: Position, colour: Rgb, style: BoxStyle, fill: Rgb);

    fn sphere(&mut self, centre: Position, size: Coordinate, colour: Rgb, fill: Rgb);

    /// Set the voxel under the cursor and advance the cursor
    fn next(&mut self, colour: Rgb);

    fn copy_plane(&mut self, axis: Axis, from: Coordinate, to: Coordinate);

    fn move_plane(&mut self, axis: Axis, from: Coordinate, to: Coordinate, colour: Rgb);

    fn set_plane(&mut self, axis: Axis, offset: Coordinate, colour: Rgb);

    /// Output one line of help text. Default implementation does nothing.
    fn print(&mut self, _text: &str) {}
}

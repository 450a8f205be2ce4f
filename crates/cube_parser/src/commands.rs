//! Per-verb decoders.
//!
//! Required arguments short-circuit on the first failure. Trailing optional
//! arguments fall back to their default when they do not decode.

use crate::{BoxStyle, CubeCommand, ParseError, Reader, Rgb, parse_axis, parse_colour, parse_direction, parse_offset, parse_position};

/// Secondary colour used by `box` and `sphere` when none is given
pub const DEFAULT_FILL: Rgb = Rgb::BLACK;

pub(crate) fn decode_all(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::All { colour })
}

pub(crate) fn decode_shift(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let axis = parse_axis(reader)?;
    let direction = parse_direction(reader)?;
    Ok(CubeCommand::Shift { axis, direction })
}

pub(crate) fn decode_set(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let position = parse_position(reader)?;
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::Set { position, colour })
}

pub(crate) fn decode_line(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let from = parse_position(reader)?;
    let to = parse_position(reader)?;
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::Line { from, to, colour })
}

pub(crate) fn decode_box(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let from = parse_position(reader)?;
    let to = parse_position(reader)?;
    let colour = parse_colour(reader)?;
    let style = parse_offset(reader).map(BoxStyle::from).unwrap_or_default();
    let fill = parse_colour(reader).unwrap_or(DEFAULT_FILL);
    Ok(CubeCommand::Box { from, to, colour, style, fill })
}

pub(crate) fn decode_sphere(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let centre = parse_position(reader)?;
    let size = parse_offset(reader)?;
    let colour = parse_colour(reader)?;
    let fill = parse_colour(reader).unwrap_or(DEFAULT_FILL);
    Ok(CubeCommand::Sphere { centre, size, colour, fill })
}

pub(crate) fn decode_next(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::Next { colour })
}

pub(crate) fn decode_copy_plane(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let axis = parse_axis(reader)?;
    let from = parse_offset(reader)?;
    let to = parse_offset(reader)?;
    Ok(CubeCommand::CopyPlane { axis, from, to })
}

pub(crate) fn decode_move_plane(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let axis = parse_axis(reader)?;
    let from = parse_offset(reader)?;
    let to = parse_offset(reader)?;
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::MovePlane { axis, from, to, colour })
}

pub(crate) fn decode_set_plane(reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    let axis = parse_axis(reader)?;
    let offset = parse_offset(reader)?;
    let colour = parse_colour(reader)?;
    Ok(CubeCommand::SetPlane { axis, offset, colour })
}

pub(crate) fn decode_help(_reader: &mut Reader<'_>) -> Result<CubeCommand, ParseError> {
    Ok(CubeCommand::Help)
}

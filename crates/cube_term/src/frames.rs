use cube_parser::TERMINATOR;

/// Splits one input line into messages at each terminator.
///
/// Blank frames (`;;` or trailing whitespace) are dropped. A final frame
/// without terminator is still returned.
pub fn split_frames(line: &str) -> impl Iterator<Item = &str> {
    line.split(TERMINATOR as char).map(str::trim).filter(|frame| !frame.is_empty())
}

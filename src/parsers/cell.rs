//! Provides parsers for a single cell of a layout grid.

use crate::parsers::{ParseResult, Span};
use nom::character::complete::one_of;
use nom::combinator::map;

/// One cell of a layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An impassable wall, written `%`
    Wall,
    /// A passable floor cell, written as a space
    Open,
    /// The cell the search starts from, written `P`
    Start,
    /// The cell the search wants to reach, written `.`
    Goal,
}

/// Parses a single cell.
pub fn parse_cell<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Cell> {
    map(one_of("% P."), |symbol| match symbol {
        '%' => Cell::Wall,
        ' ' => Cell::Open,
        'P' => Cell::Start,
        '.' => Cell::Goal,
        _ => unreachable!("one_of only yields the listed symbols"),
    })(input.into())
}

//! Provides parsers for whole layout grids.

use crate::parsers::{parse_cell, Cell, ParseResult, Span};
use nom::character::complete::line_ending;
use nom::combinator::all_consuming;
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::terminated;

/// Parses one row of cells, up to but not including the line break.
pub fn parse_row<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Vec<Cell>> {
    many1(parse_cell)(input.into())
}

/// Parses a full layout grid and insists on consuming all of it, so stray
/// symbols are reported instead of silently truncating the grid.
///
/// ## Example
/// ```
/// # use wayfinder::parsers::{parse_layout, Cell, Span};
/// let (_, rows) = parse_layout(Span::new("%%%\n%P%\n%%%\n")).unwrap();
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1][1], Cell::Start);
/// ```
pub fn parse_layout<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Vec<Vec<Cell>>> {
    all_consuming(terminated(
        separated_list1(line_ending, parse_row),
        many0(line_ending),
    ))(input.into())
}

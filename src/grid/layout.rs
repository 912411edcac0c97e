//! The static description of a maze: which cells are walls, where the search
//! starts and where the goal is.

use crate::grid::Point;
use crate::parsers::{parse_layout, Cell, ParseError, Span};
use itertools::iproduct;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout text is empty")]
    Empty,
    #[error("unexpected symbol at line {line}, column {column}")]
    Syntax { line: u32, column: usize },
    #[error("row {row} is {found} cells wide, the first row is {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout has no start cell")]
    MissingStart,
    #[error("layout has {0} start cells, expected exactly one")]
    DuplicateStart(usize),
    #[error("layout has no goal cell")]
    MissingGoal,
    #[error("layout has {0} goal cells, expected exactly one")]
    DuplicateGoal(usize),
}

/// A rectangular maze read from a `.lay` file. `%` is a wall, a space is
/// floor, `P` is the start cell and `.` is the goal cell. Both of the marked
/// cells are floor, and exactly one of each must be present.
#[derive(Debug, Clone)]
pub struct Layout {
    width: usize,
    height: usize,
    /// Wall flags in row-major order
    walls: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Layout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        if text.trim().is_empty() {
            return Err(LayoutError::Empty);
        }
        let rows = match parse_layout(Span::new(text)) {
            Ok((_, rows)) => rows,
            Err(error) => return Err(syntax_error(error)),
        };

        let height = rows.len();
        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let mut walls = vec![false; width * height];
        let mut starts = vec![];
        let mut goals = vec![];
        for (y, x) in iproduct!(0..height, 0..width) {
            let point = Point::new(x as i32, y as i32);
            match rows[y][x] {
                Cell::Wall => walls[y * width + x] = true,
                Cell::Open => {}
                Cell::Start => starts.push(point),
                Cell::Goal => goals.push(point),
            }
        }

        let start = match starts.len() {
            0 => return Err(LayoutError::MissingStart),
            1 => starts[0],
            count => return Err(LayoutError::DuplicateStart(count)),
        };
        let goal = match goals.len() {
            0 => return Err(LayoutError::MissingGoal),
            1 => goals[0],
            count => return Err(LayoutError::DuplicateGoal(count)),
        };

        Ok(Self {
            width,
            height,
            walls,
            start,
            goal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        0 <= point.x
            && point.x < self.width as i32
            && 0 <= point.y
            && point.y < self.height as i32
    }

    /// Whether `point` is impassable. Everything outside the grid counts as a
    /// wall.
    pub fn is_wall(&self, point: Point) -> bool {
        if !self.in_bounds(point) {
            return true;
        }
        self.walls[point.y as usize * self.width + point.x as usize]
    }
}

fn syntax_error(error: nom::Err<ParseError<'_>>) -> LayoutError {
    match error {
        nom::Err::Error(inner) | nom::Err::Failure(inner) => match inner.errors.first() {
            Some((span, _)) => LayoutError::Syntax {
                line: span.location_line(),
                column: span.get_utf8_column(),
            },
            None => LayoutError::Syntax { line: 0, column: 0 },
        },
        nom::Err::Incomplete(_) => LayoutError::Syntax { line: 0, column: 0 },
    }
}

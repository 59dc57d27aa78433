use std::fmt;

use chumsky::prelude::*;
use glam::IVec2;
use itertools::iproduct;
use miette::*;

/// Offsets of the eight surrounding positions, as `(column, row)` deltas.
const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// A roll of paper (`@`).
    Marked,
    /// Free floor (`.`).
    Empty,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Marked => '@',
            Cell::Empty => '.',
        }
    }
}

/// Fixed-size grid stored row-major in a single buffer.
///
/// Dimensions never change after construction; only the cell contents do,
/// and the peeling routines only ever flip `Marked` to `Empty`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        ensure!(
            cells.len() == width * height,
            "grid of {width}x{height} needs {} cells, got {}",
            width * height,
            cells.len()
        );
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from parsed rows, rejecting ragged input.
    fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        // Blank lines (a trailing newline at EOF) parse as empty rows
        let rows: Vec<_> = rows.into_iter().filter(|r| !r.is_empty()).collect();

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            bail!(
                "row {y} has {} cells but the first row has {width}",
                row.len()
            );
        }

        Grid::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_marked(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.width + column] == Cell::Marked
    }

    pub(crate) fn unmark(&mut self, row: usize, column: usize) {
        self.cells[row * self.width + column] = Cell::Empty;
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marked).count()
    }

    /// Returns the cell at `pos`, or `None` when it falls outside the grid.
    fn get(&self, pos: IVec2) -> Option<Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Counts marked cells among the in-bounds 8-neighbours of `(row, column)`.
    ///
    /// Positions outside the grid are not neighbours at all, so a corner has
    /// three candidates and a border cell five.
    pub fn count_neighbors(&self, row: usize, column: usize) -> usize {
        let origin = IVec2::new(column as i32, row as i32);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&delta| self.get(origin + delta) == Some(Cell::Marked))
            .count()
    }

    /// Row-major `(row, column)` positions of every cell.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Cell>>, extra::Err<Rich<'a, char>>> {
    let cell = just('@').to(Cell::Marked).or(just('.').to(Cell::Empty));

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
}

/// Parses a block of `@` / `.` lines into a [`Grid`].
#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Grid> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Grid::from_rows(rows)
}

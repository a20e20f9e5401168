use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::DishError;
use crate::geometry::Position;
use crate::sparse::SparseDish;

/// A single cell of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Rolling,
    Obstacle,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Free),
            'O' => Some(Cell::Rolling),
            '#' => Some(Cell::Obstacle),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Rolling => 'O',
            Cell::Obstacle => '#',
        }
    }
}

/// The cell-matrix form of a dish: easy to write down, read and print, but
/// it does no tilting itself. Convert with [`DenseDish::to_sparse`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseDish {
    rows: Vec<Vec<Cell>>,
}

impl DenseDish {
    /// Builds a dish from rows of cells. Every row must be as long as the
    /// first one.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, DishError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(DishError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Unchecked constructor for rows that are rectangular by construction.
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.rows.get(position.y)?.get(position.x).copied()
    }

    /// Row-major scan: rollers come out top to bottom, left to right.
    pub fn to_sparse(&self) -> SparseDish {
        let mut rollers = Vec::new();
        let mut obstacles = BTreeSet::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Rolling => rollers.push(Position::new(x, y)),
                    Cell::Obstacle => {
                        obstacles.insert(Position::new(x, y));
                    }
                    Cell::Free => {}
                }
            }
        }
        SparseDish::from_parts(self.height(), self.width(), rollers, obstacles)
    }

    /// The dish as text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DenseDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for DenseDish {
    type Err = DishError;

    /// One line per row. Line terminators at the end of the text are
    /// ignored; any other character must be a cell symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end_matches(['\n', '\r']);
        if s.is_empty() {
            return DenseDish::new(Vec::new());
        }

        let rows = s
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, symbol)| {
                        Cell::from_symbol(symbol).ok_or(DishError::UnknownSymbol {
                            symbol,
                            position: Position::new(x, y),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        DenseDish::new(rows)
    }
}

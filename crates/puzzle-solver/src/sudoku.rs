//! Sudoku on an n×n grid, where n is a perfect square.
//!
//! A state is a partially filled grid. Moves fill the first empty cell (in
//! row-major order) with a symbol that does not clash with its row, column or
//! box.

use std::convert::Infallible;
use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::puzzle::Puzzle;

/// Largest supported side length
pub const MAX_SIZE: usize = 16;

/// Symbols a cell may still take
type Candidates = SmallVec<[u8; MAX_SIZE]>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SudokuError {
    #[error("grid size {0} is not one of 1, 4, 9 or 16")]
    UnsupportedSize(usize),
    #[error("row {row} has {len} cells, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("value {value} at ({row}, {col}) is out of range 0..={max}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuPuzzle {
    size: usize,
    box_size: usize,
    /// Row-major cells, `None` when empty
    cells: Vec<Option<u8>>,
}

impl SudokuPuzzle {
    /// Build a puzzle from rows of values, with 0 marking an empty cell.
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Self, SudokuError> {
        let size = grid.len();
        let box_size = match size {
            1 => 1,
            4 => 2,
            9 => 3,
            16 => 4,
            _ => return Err(SudokuError::UnsupportedSize(size)),
        };

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in grid.into_iter().enumerate() {
            if values.len() != size {
                return Err(SudokuError::RowLength {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if value as usize > size {
                    return Err(SudokuError::ValueOutOfRange {
                        row,
                        col,
                        value,
                        max: size,
                    });
                }
                cells.push((value != 0).then_some(value));
            }
        }

        Ok(Self {
            size,
            box_size,
            cells,
        })
    }

    /// Value at (`row`, `col`), `None` if the cell is empty or off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Copy with one cell filled
    fn with_value(&self, index: usize, value: u8) -> Self {
        let mut next = self.clone();
        next.cells[index] = Some(value);
        next
    }

    /// Indices of every cell sharing a row, column or box with `index`,
    /// excluding `index` itself
    fn peers(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = (index / self.size, index % self.size);
        let (box_row, box_col) = (row - row % self.box_size, col - col % self.box_size);

        let row_cells = (0..self.size).map(move |c| row * self.size + c);
        let col_cells = (0..self.size).map(move |r| r * self.size + col);
        let box_cells = (0..self.box_size * self.box_size).map(move |i| {
            (box_row + i / self.box_size) * self.size + box_col + i % self.box_size
        });

        row_cells
            .chain(col_cells)
            .chain(box_cells)
            .filter(move |&i| i != index)
    }

    /// Symbols that could go in `index` without clashing with a peer
    fn candidates(&self, index: usize) -> Candidates {
        let mut used = [false; MAX_SIZE + 1];
        for peer in self.peers(index) {
            if let Some(value) = self.cells[peer] {
                used[value as usize] = true;
            }
        }
        (1..=self.size as u8)
            .filter(|&value| !used[value as usize])
            .collect()
    }

    /// True if some filled cell repeats a value held by one of its peers
    fn has_conflict(&self) -> bool {
        self.cells.iter().enumerate().any(|(index, &cell)| {
            cell.is_some_and(|value| {
                self.peers(index)
                    .any(|peer| self.cells[peer] == Some(value))
            })
        })
    }

    fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }
}

fn symbol(value: Option<u8>) -> char {
    value
        .and_then(|v| char::from_digit(v as u32, MAX_SIZE as u32 + 1))
        .unwrap_or('*')
}

impl fmt::Display for SudokuPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in cells {
                write!(f, "{}", symbol(cell))?;
            }
        }
        Ok(())
    }
}

impl Puzzle for SudokuPuzzle {
    type Error = Infallible;

    fn fingerprint(&self) -> String {
        self.to_string()
    }

    fn is_solved(&self) -> bool {
        self.first_empty().is_none() && !self.has_conflict()
    }

    fn fail_fast(&self) -> bool {
        if self.has_conflict() {
            return true;
        }
        self.cells
            .iter()
            .enumerate()
            .any(|(index, cell)| cell.is_none() && self.candidates(index).is_empty())
    }

    fn extensions(&self) -> Result<Vec<Self>, Infallible> {
        let Some(index) = self.first_empty() else {
            return Ok(Vec::new());
        };
        Ok(self
            .candidates(index)
            .into_iter()
            .map(|value| self.with_value(index, value))
            .collect())
    }
}

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, CellState, FormatError, GridError};

/// Grid owns the cellular automaton matrix.
///
/// Cells live in a flat row-major arena of `(rows + 2) * (cols + 2)` entries:
/// the `rows x cols` interior plus a one-cell sentinel border that is always
/// empty, so neighbor counting never needs bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every interior cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows + 2)
            .flat_map(|r| (0..cols + 2).map(move |c| (r, c)))
            .map(|(r, c)| Cell::new((r as isize - 1, c as isize - 1), CellState::Empty))
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid from interior states given row by row.
    /// Every row must have the same non-zero width.
    pub fn from_states(states: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let width = states.first().ok_or(FormatError::NoDataRows)?.len();
        if width == 0 {
            return Err(FormatError::EmptyRow.into());
        }
        if let Some((idx, row)) = states.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(FormatError::RaggedRow {
                line: idx + 1,
                expected: width,
                found: row.len(),
            }
            .into());
        }

        let mut grid = Self::new(states.len(), width);
        for (r, row) in states.into_iter().enumerate() {
            for (c, state) in row.into_iter().enumerate() {
                grid.set(r, c, state)?;
            }
        }
        Ok(grid)
    }

    /// Seeded random fill; `density` is the chance of a cell starting alive.
    pub fn random(rows: usize, cols: usize, density: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let density = density.clamp(0.0, 1.0);
        let mut grid = Self::new(rows, cols);

        for r in 0..rows {
            for c in 0..cols {
                let idx = grid.index(r + 1, c + 1);
                if rng.random_bool(density) {
                    grid.cells[idx].set_state(CellState::Alive);
                }
            }
        }
        grid
    }

    /// Interior dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Index into the padded arena; `r`/`c` are padded coordinates.
    const fn index(&self, r: usize, c: usize) -> usize {
        r * (self.cols + 2) + c
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at interior coordinates
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[self.index(row + 1, col + 1)])
    }

    /// Whether the interior cell is alive.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the interior.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        match self.cell_at(row, col) {
            Ok(cell) => cell.is_alive(),
            Err(err) => panic!("{err}"),
        }
    }

    /// Set an interior cell. The border cannot be written.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row + 1, col + 1);
        self.cells[idx].set_state(state);
        Ok(())
    }

    /// Live cells in the 3x3 block centred on padded `(r, c)`, excluding the centre.
    fn count_live_neighbors(&self, r: usize, c: usize) -> u8 {
        let block = (r - 1..=r + 1)
            .flat_map(|nr| (c - 1..=c + 1).map(move |nc| (nr, nc)))
            .filter(|&(nr, nc)| self.cells[self.index(nr, nc)].is_alive())
            .count() as u8;

        block - u8::from(self.cells[self.index(r, c)].is_alive())
    }

    /// Advance one generation.
    ///
    /// All neighbor counts are taken into a snapshot before any cell changes,
    /// so the whole generation reads from the same prior state.
    pub fn update(&mut self) {
        let counts: Vec<u8> = (1..=self.rows)
            .flat_map(|r| (1..=self.cols).map(move |c| (r, c)))
            .map(|(r, c)| self.count_live_neighbors(r, c))
            .collect();

        let (rows, cols) = (self.rows, self.cols);
        let positions = (1..=rows).flat_map(|r| (1..=cols).map(move |c| (r, c)));
        for ((r, c), count) in positions.zip(counts) {
            let idx = self.index(r, c);
            let next = self.cells[idx].state().evolve(count);
            self.cells[idx].set_state(next);
        }
    }

    /// Iterate interior cells in row-major order
    pub fn interior_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        (1..=self.rows)
            .flat_map(move |r| (1..=self.cols).map(move |c| (r, c)))
            .map(move |(r, c)| &self.cells[self.index(r, c)])
    }

    /// Visit interior cells in row-major order
    pub fn for_each_interior_cell(&self, visitor: impl FnMut(&Cell)) {
        self.interior_cells().for_each(visitor);
    }

    /// Iterate the sentinel border cells
    pub fn border_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        self.cells.iter().filter(move |cell| {
            let (r, c) = cell.position();
            r == -1 || c == -1 || r == rows || c == cols
        })
    }

    /// Number of live interior cells
    pub fn population(&self) -> usize {
        self.interior_cells().filter(|cell| cell.is_alive()).count()
    }

    /// Whole matrix, border included, as rows of 0/1
    pub fn bordered_dump(&self) -> String {
        self.cells
            .chunks(self.cols + 2)
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_alive() { "1" } else { "0" })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every cell's position, border included, one matrix row per line
    pub fn positions_dump(&self) -> String {
        self.cells
            .chunks(self.cols + 2)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{:?}", cell.position()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Interior as rows of 0/1, matching the pattern file body
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 1..=self.rows {
            let line = (1..=self.cols)
                .map(|c| if self.cells[self.index(r, c)].is_alive() { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

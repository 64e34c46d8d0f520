/// State of a single cell. Border cells are always `Empty`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Empty,
    Alive,
}

impl CellState {
    /// Check if the state is alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Empty cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in an empty cell
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Empty, 3) => CellState::Alive,
            _ => CellState::Empty,
        }
    }

    /// Pattern file token mapping: `"0"` is empty, anything else is alive.
    pub fn from_token(token: &str) -> Self {
        if token == "0" {
            CellState::Empty
        } else {
            CellState::Alive
        }
    }
}

/// A cell in the bordered matrix.
///
/// `position` is `(row, col)` in interior coordinates, so border cells carry
/// `-1` on the low side and `rows`/`cols` on the high side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    position: (isize, isize),
    state: CellState,
}

impl Cell {
    pub const fn new(position: (isize, isize), state: CellState) -> Self {
        Self { position, state }
    }

    pub const fn position(&self) -> (isize, isize) {
        self.position
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

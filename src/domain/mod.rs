mod cell;
mod error;
mod grid;
mod loader;

pub use cell::{Cell, CellState};
pub use error::{FormatError, GridError};
pub use grid::Grid;
pub use loader::PatternLoader;

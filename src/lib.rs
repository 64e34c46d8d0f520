// Domain layer - Core simulation: cells, bordered grid, pattern files
pub mod domain;

// Application layer - Generation counting and command dispatch
pub mod application;

// Infrastructure layer - CLI, rendering, input
pub mod cli;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, CellState, FormatError, Grid, GridError, PatternLoader};
pub use application::GameState;
pub use rendering::Renderer;
pub use cli::Cli;

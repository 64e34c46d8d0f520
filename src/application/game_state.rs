use log::debug;

use crate::domain::Grid;
use crate::input::Command;

/// GameState orchestrates the simulation.
/// This is the application layer that owns the grid for the lifetime of the window.
pub struct GameState {
    pub grid: Grid,
    pub generation: u64,
    pub is_running: bool,
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            is_running: true,
        }
    }

    /// Advance the grid by one generation
    pub fn advance(mut self) -> Self {
        self.grid.update();
        self.generation += 1;
        debug!(
            "generation {} ({} alive)\n{}",
            self.generation,
            self.grid.population(),
            self.grid
        );
        self
    }

    /// Stop the frame loop
    pub fn quit(mut self) -> Self {
        debug!("quit requested at generation {}", self.generation);
        self.is_running = false;
        self
    }

    /// Apply one frame's input command
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Quit => self.quit(),
            Command::Advance(steps) => (0..steps).fold(self, |state, _| state.advance()),
            Command::Idle => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use macroquad::prelude::KeyCode;

    use crate::domain::CellState;
    use crate::input;

    fn blinker() -> Grid {
        let mut grid = Grid::new(5, 5);
        for c in 1..4 {
            grid.set(2, c, CellState::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_idle_frames_do_not_advance() {
        let state = GameState::new(blinker())
            .apply(Command::Idle)
            .apply(Command::Idle);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid, blinker());
        assert!(state.is_running);
    }

    #[test]
    fn test_advance_counts_generations() {
        let state = GameState::new(blinker()).apply(Command::Advance(1));
        assert_eq!(state.generation, 1);
        assert!(state.grid.is_alive(1, 2));
        assert!(!state.grid.is_alive(2, 1));

        let state = state.apply(Command::Advance(1));
        assert_eq!(state.generation, 2);
        assert_eq!(state.grid, blinker());
    }

    #[test]
    fn test_keys_released_together_each_advance() {
        let released: HashSet<_> = [KeyCode::A, KeyCode::Enter, KeyCode::Right].into_iter().collect();
        let state = GameState::new(blinker()).apply(input::classify(&released, false));
        assert_eq!(state.generation, 3);
        // Blinker has period 2, so three steps leave it vertical
        assert!(state.grid.is_alive(1, 2));
        assert!(state.grid.is_alive(3, 2));
        assert!(!state.grid.is_alive(2, 1));
    }

    #[test]
    fn test_quit_stops_without_advancing() {
        let state = GameState::new(blinker()).apply(Command::Quit);
        assert!(!state.is_running);
        assert_eq!(state.generation, 0);
    }
}

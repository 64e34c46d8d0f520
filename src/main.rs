use anyhow::Context;
use bordered_life::{Cli, GameState, Grid, PatternLoader, Renderer, input};
use clap::Parser;
use log::info;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 700,
        window_height: 700,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(grid: Grid) {
    let renderer = Renderer::new();
    let mut state = GameState::new(grid);

    // Window close is reported through input::poll instead of exiting
    prevent_quit();

    while state.is_running {
        state = state.apply(input::poll());

        renderer.draw(&state.grid);

        next_frame().await;
    }

    info!("closing after {} generations", state.generation);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new().parse_filters(&cli.rust_log).init();

    // Load before opening the window so a bad pattern never renders
    let grid = PatternLoader::load(&cli.pattern)
        .with_context(|| format!("failed to load pattern {}", cli.pattern.display()))?;
    let (rows, cols) = grid.dimensions();
    info!("{rows}x{cols} grid, {} alive; press any key to advance", grid.population());

    macroquad::Window::from_config(window_conf(), run(grid));
    Ok(())
}

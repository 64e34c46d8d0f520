use macroquad::prelude::*;

use crate::domain::Grid;

/// Screen-space placement of interior cell `(row, col)` in a `rows x cols`
/// grid stretched over a `width x height` surface.
pub fn cell_rect(row: usize, col: usize, (rows, cols): (usize, usize), width: f32, height: f32) -> Rect {
    let cell_w = width / cols as f32;
    let cell_h = height / rows as f32;
    Rect::new(col as f32 * cell_w, row as f32 * cell_h, cell_w, cell_h)
}

/// Offsets of the separator lines between rows (or columns) along `extent`.
pub fn separator_offsets(count: usize, extent: f32) -> impl Iterator<Item = f32> {
    let step = extent / count as f32;
    (1..count).map(move |i| i as f32 * step)
}

/// Renderer holds everything drawing needs, so the grid stays windowing-free.
pub struct Renderer {
    pub background: Color,
    pub alive: Color,
    pub separator: Color,
    pub line_thickness: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: WHITE,
            alive: RED,
            separator: BLACK,
            line_thickness: 1.0,
        }
    }

    /// Draw one frame: clear, fill live cells, then the separator lines on top
    pub fn draw(&self, grid: &Grid) {
        let (width, height) = (screen_width(), screen_height());
        let dimensions = grid.dimensions();

        clear_background(self.background);

        grid.for_each_interior_cell(|cell| {
            if !cell.is_alive() {
                return;
            }
            let (row, col) = cell.position();
            let rect = cell_rect(row as usize, col as usize, dimensions, width, height);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, self.alive);
        });

        let (rows, cols) = dimensions;
        for y in separator_offsets(rows, height) {
            draw_line(0.0, y, width, y, self.line_thickness, self.separator);
        }
        for x in separator_offsets(cols, width) {
            draw_line(x, 0.0, x, height, self.line_thickness, self.separator);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect_scales_to_surface() {
        let rect = cell_rect(0, 0, (10, 5), 700.0, 700.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 140.0, 70.0));

        let rect = cell_rect(3, 2, (10, 5), 700.0, 700.0);
        assert_eq!(rect, Rect::new(280.0, 210.0, 140.0, 70.0));
    }

    #[test]
    fn test_last_cell_touches_far_edges() {
        let rect = cell_rect(6, 6, (7, 7), 700.0, 700.0);
        assert_eq!(rect.right(), 700.0);
        assert_eq!(rect.bottom(), 700.0);
    }

    #[test]
    fn test_separators_sit_between_cells() {
        let offsets: Vec<f32> = separator_offsets(4, 400.0).collect();
        assert_eq!(offsets, vec![100.0, 200.0, 300.0]);
        assert_eq!(separator_offsets(1, 400.0).count(), 0);
    }

    #[test]
    fn test_default_palette() {
        let renderer = Renderer::default();
        assert_eq!(renderer.background, WHITE);
        assert_eq!(renderer.alive, RED);
        assert_eq!(renderer.separator, BLACK);
    }
}

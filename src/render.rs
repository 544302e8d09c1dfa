use crate::canvas::Canvas;
use crate::grid::Grid;
use crate::layout::BoardLayout;

/// Draw every cell of `grid`: dead cells as an outline, live cells filled.
///
/// The canvas is not reset first.
pub fn draw_grid(canvas: &mut Canvas, grid: &Grid, layout: &BoardLayout) {
    for (row, col, alive) in grid.iter() {
        let rect = layout.cell_rect(row, col);

        if alive {
            canvas.fill_rect(rect);
        } else {
            canvas.outline_rect(rect);
        }
    }
}

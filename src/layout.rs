use crate::CellOffset;
use crate::CellSize;
use crate::DotOffset;

/// An axis aligned rectangle on the canvas, in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: DotOffset,
    pub y: DotOffset,
    pub width: DotOffset,
    pub height: DotOffset,
}

impl Rect {
    pub const fn new(x: DotOffset, y: DotOffset, width: DotOffset, height: DotOffset) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where the grid sits on the canvas and how big each cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top left corner of cell (0, 0)
    pub origin_x: DotOffset,
    pub origin_y: DotOffset,

    pub cell_width: DotOffset,
    pub cell_height: DotOffset,
}

impl BoardLayout {
    /// Centre a `size x size` grid inside `area`. The grid may overflow the area, in which case
    /// the origin goes negative.
    pub fn centered(
        area: Rect,
        size: CellSize,
        cell_width: DotOffset,
        cell_height: DotOffset,
    ) -> Self {
        let board_width = size.saturating_mul(cell_width);
        let board_height = size.saturating_mul(cell_height);

        Self {
            origin_x: area.x + area.width / 2 - board_width / 2,
            origin_y: area.y + area.height / 2 - board_height / 2,
            cell_width,
            cell_height,
        }
    }

    /// Snap the origin down to a multiple of `x` and `y` dots.
    ///
    /// With `x` and `y` set to the dots of a terminal character, every cell whose size is a
    /// multiple of those covers whole characters.
    pub fn aligned(self, x: DotOffset, y: DotOffset) -> Self {
        Self {
            origin_x: self.origin_x.div_euclid(x) * x,
            origin_y: self.origin_y.div_euclid(y) * y,
            ..self
        }
    }

    /// The `(row, col)` of the cell under the dot at (`x`, `y`).
    ///
    /// The result is not checked against the grid. Positions above or to the left of the origin
    /// round towards negative infinity, so they never land on row or column 0.
    pub fn cell_at(&self, x: DotOffset, y: DotOffset) -> (CellOffset, CellOffset) {
        let col = (x - self.origin_x).div_euclid(self.cell_width);
        let row = (y - self.origin_y).div_euclid(self.cell_height);

        (row, col)
    }

    /// The on-canvas rectangle covered by cell (`row`, `col`)
    pub fn cell_rect(&self, row: CellOffset, col: CellOffset) -> Rect {
        Rect::new(
            self.origin_x + col * self.cell_width,
            self.origin_y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

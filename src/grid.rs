use crate::CellOffset;
use crate::CellSize;

/// A square board of cells, each either alive or dead.
///
/// Cells are stored row-major in `cells`. `next` has the same shape and holds the generation being
/// computed during a step; see [`crate::engine::step`]. Outside of a step its contents carry no
/// meaning.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Side length of the board. Always at least 1.
    size: CellSize,

    /// The current generation
    pub(crate) cells: Vec<bool>,

    /// Scratch buffer for the next generation
    pub(crate) next: Vec<bool>,
}

impl Grid {
    /// Create an all-dead `size x size` grid. Sizes below 1 are raised to 1.
    pub fn new(size: CellSize) -> Self {
        let size = size.max(1);
        let n = Self::area(size);

        Self {
            size,
            cells: vec![false; n],
            next: vec![false; n],
        }
    }

    pub fn size(&self) -> CellSize {
        self.size
    }

    /// Replace the board with an all-dead `size x size` one. Sizes below 1 are ignored and the
    /// current board is kept as is.
    ///
    /// Returns whether the board was replaced.
    pub fn resize(&mut self, size: CellSize) -> bool {
        if size < 1 {
            return false;
        }

        *self = Self::new(size);

        true
    }

    /// Kill every cell. The size is unchanged.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.next.fill(false);
    }

    /// Flip the cell at (`row`, `col`). Coordinates off the board are ignored.
    ///
    /// Returns whether a cell was flipped.
    pub fn toggle(&mut self, row: CellOffset, col: CellOffset) -> bool {
        let Some(i) = self.index(row, col) else {
            return false;
        };

        self.cells[i] = !self.cells[i];

        true
    }

    /// Set the cell at (`row`, `col`). Coordinates off the board are ignored.
    pub fn set(&mut self, row: CellOffset, col: CellOffset, alive: bool) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = alive;
        }
    }

    /// Whether the cell at (`row`, `col`) is alive. Anything off the board is dead.
    pub fn is_alive(&self, row: CellOffset, col: CellOffset) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over every cell as `(row, col, alive)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellOffset, CellOffset, bool)> + '_ {
        let n = self.size as usize;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| ((i / n) as CellOffset, (i % n) as CellOffset, alive))
    }

    /// Index into `cells` for (`row`, `col`), or `None` if the coordinate lies off the board.
    pub(crate) fn index(&self, row: CellOffset, col: CellOffset) -> Option<usize> {
        if !(0..self.size).contains(&row) || !(0..self.size).contains(&col) {
            return None;
        }

        Some(row as usize * self.size as usize + col as usize)
    }

    fn area(size: CellSize) -> usize {
        let n = size as usize;
        n * n
    }
}

// `next` is scratch space, two grids are equal when their current generations are.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Default for Grid {
    fn default() -> Self {
        Self::new(35)
    }
}

use crate::grid::Grid;

/// Offsets of the eight cells surrounding a cell, as `(d_row, d_col)`.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Advance `grid` by one generation of Conway's Game of Life (B3/S23).
///
/// The board does not wrap: cells on the border simply have fewer neighbors.
///
/// Every cell of the next generation is written to the scratch buffer from the untouched current
/// generation, and only then are the two buffers swapped. No cell can observe a neighbor's new
/// state within the same step.
pub fn step(grid: &mut Grid) {
    let n = grid.size() as usize;

    for row in 0..n {
        for col in 0..n {
            let alive = grid.cells[row * n + col];
            let neighbors = count_neighbors(&grid.cells, n, row, col);

            grid.next[row * n + col] = next_state(alive, neighbors);
        }
    }

    std::mem::swap(&mut grid.cells, &mut grid.next);
}

/// B3/S23: a dead cell with exactly 3 neighbors is born, a live cell with 2 or 3 survives.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Count the live neighbors of (`row`, `col`) on an `n x n` board.
///
/// Only 0-3 versus more matters to the rule, so counting stops at 4.
fn count_neighbors(cells: &[bool], n: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for (dr, dc) in NEIGHBORS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };

        if r >= n || c >= n || !cells[r * n + c] {
            continue;
        }

        count += 1;
        if count > 3 {
            break;
        }
    }

    count
}

#[cfg(test)]
mod test {
    use super::next_state;
    use super::step;
    use crate::grid::Grid;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len() as i32);

        for (r, line) in rows.iter().enumerate() {
            for (c, b) in line.bytes().enumerate() {
                grid.set(r as i32, c as i32, b == b'#');
            }
        }

        grid
    }

    fn lines(grid: &Grid) -> Vec<String> {
        let n = grid.size();

        (0..n)
            .map(|r| {
                (0..n)
                    .map(|c| if grid.is_alive(r, c) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            assert_eq!(next_state(false, neighbors), neighbors == 3);
            assert_eq!(next_state(true, neighbors), neighbors == 2 || neighbors == 3);
        }
    }

    #[test]
    fn birth() {
        let mut grid = grid_from(&["#.#", "...", ".#."]);

        step(&mut grid);

        assert!(grid.is_alive(1, 1));
    }

    #[test]
    fn underpopulation() {
        let mut lonely = grid_from(&["...", ".#.", "..."]);
        step(&mut lonely);
        assert!(!lonely.is_alive(1, 1));

        let mut pair = grid_from(&["#..", ".#.", "..."]);
        step(&mut pair);
        assert!(!pair.is_alive(1, 1));
    }

    #[test]
    fn overpopulation() {
        let mut grid = grid_from(&["#.#", ".#.", "#.#"]);

        step(&mut grid);

        assert!(!grid.is_alive(1, 1));
    }

    #[test]
    fn survival() {
        let mut two = grid_from(&["#..", ".#.", "..#"]);
        step(&mut two);
        assert!(two.is_alive(1, 1));

        let mut three = grid_from(&["#.#", ".#.", "..#"]);
        step(&mut three);
        assert!(three.is_alive(1, 1));
    }

    #[test]
    fn corner_does_not_wrap() {
        // On a torus (0, 0) would see (3, 3) and (3, 0) as well and survive
        let mut grid = grid_from(&["##..", "....", "....", "#..#"]);

        step(&mut grid);

        assert!(!grid.is_alive(0, 0));
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = grid_from(&[".....", ".....", ".###.", ".....", "....."]);

        step(&mut grid);
        assert_eq!(lines(&grid), [".....", "..#..", "..#..", "..#..", "....."]);

        step(&mut grid);
        assert_eq!(lines(&grid), [".....", ".....", ".###.", ".....", "....."]);
    }

    #[test]
    fn glider_moves() {
        let mut grid = grid_from(&[
            ".#....", "..#...", "###...", "......", "......", "......",
        ]);

        for _ in 0..4 {
            step(&mut grid);
        }

        assert_eq!(
            lines(&grid),
            ["......", "..#...", "...#..", ".###..", "......", "......"]
        );
    }
}

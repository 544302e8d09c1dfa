use std::time::Duration;

use gridlife::config::Config;
use gridlife::engine;
use gridlife::grid::Grid;
use gridlife::sim::Simulation;

fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len() as i32);

    for (r, line) in rows.iter().enumerate() {
        for (c, b) in line.bytes().enumerate() {
            grid.set(r as i32, c as i32, b == b'#');
        }
    }

    grid
}

fn sim_from(rows: &[&str]) -> anyhow::Result<Simulation> {
    let mut sim = Simulation::new(&Config::default())?;
    sim.request_resize(rows.len() as i32);

    for (r, line) in rows.iter().enumerate() {
        for (c, b) in line.bytes().enumerate() {
            if b == b'#' {
                sim.toggle_cell(r as i32, c as i32);
            }
        }
    }

    Ok(sim)
}

#[test]
fn test_birth_in_3x3() {
    let mut grid = grid_from(&["#..", "#..", "#.."]);

    engine::step(&mut grid);

    assert!(grid.is_alive(1, 1));
    assert!(grid.is_alive(1, 0));
    assert!(!grid.is_alive(0, 0));
    assert!(!grid.is_alive(2, 0));
}

#[test]
fn test_neighbor_counts_decide_survival() {
    // Live centre plus `n` live neighbors, taken in a fixed order around it
    let ring = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)];

    for n in 0..=8 {
        let mut grid = Grid::new(3);
        grid.set(1, 1, true);
        for &(r, c) in &ring[..n] {
            grid.set(r, c, true);
        }

        engine::step(&mut grid);

        assert_eq!(
            grid.is_alive(1, 1),
            n == 2 || n == 3,
            "live cell with {n} neighbors"
        );
    }
}

#[test]
fn test_block_is_still() {
    let mut grid = grid_from(&["....", ".##.", ".##.", "...."]);
    let block = grid.clone();

    for _ in 0..50 {
        engine::step(&mut grid);
        assert_eq!(grid, block);
    }
}

#[test]
fn test_block_in_corner_is_still() {
    let mut grid = grid_from(&["##.", "##.", "..."]);
    let block = grid.clone();

    for _ in 0..10 {
        engine::step(&mut grid);
    }

    assert_eq!(grid, block);
}

#[test]
fn test_corner_cell_does_not_wrap() {
    let mut grid = grid_from(&["#...#", ".....", ".....", ".....", "#...."]);
    grid.set(0, 1, true);

    engine::step(&mut grid);

    assert!(!grid.is_alive(0, 0));
}

#[test]
fn test_small_deltas_step_exactly_once() -> anyhow::Result<()> {
    let mut sim = sim_from(&[".....", ".....", ".###.", ".....", "....."])?;
    let interval = sim.update_interval();

    // Ten frames that add up to exactly one interval
    let mut steps = 0;
    for _ in 0..10 {
        if sim.advance(interval / 10) {
            steps += 1;
        }
    }

    assert_eq!(steps, 1);
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.clock().elapsed(), Duration::ZERO);
    assert!(sim.grid().is_alive(1, 2));
    assert!(sim.grid().is_alive(3, 2));

    Ok(())
}

#[test]
fn test_many_frames_many_steps() -> anyhow::Result<()> {
    let mut sim = sim_from(&["...", "...", "..."])?;
    sim.set_update_interval(Duration::from_millis(100));

    // 1000 frames of 10ms is 10 seconds, i.e. 100 intervals
    let steps = (0..1000)
        .filter(|_| sim.advance(Duration::from_millis(10)))
        .count();

    assert_eq!(steps, 100);
    assert_eq!(sim.generation(), 100);

    Ok(())
}

#[test]
fn test_toggle_off_grid_is_ignored() -> anyhow::Result<()> {
    let mut sim = sim_from(&["#..", ".#.", "..#"])?;
    let before = sim.grid().clone();
    let size = sim.grid().size();

    sim.toggle_cell(size, size);
    sim.toggle_cell(-1, 0);

    assert_eq!(sim.grid(), &before);

    Ok(())
}

#[test]
fn test_resize_rules() -> anyhow::Result<()> {
    let mut sim = sim_from(&["#..", ".#.", "..#"])?;
    let before = sim.grid().clone();

    sim.request_resize(0);
    sim.request_resize(-5);
    assert_eq!(sim.grid(), &before);

    sim.request_resize(10);
    assert_eq!(sim.grid(), &Grid::new(10));

    Ok(())
}

#[test]
fn test_paused_never_changes_cells() -> anyhow::Result<()> {
    let mut sim = sim_from(&[".....", ".#...", "..##.", ".##..", "....."])?;
    sim.set_running(false);
    let before = sim.grid().clone();

    for _ in 0..600 {
        sim.advance(Duration::from_millis(16));
    }

    assert_eq!(sim.grid(), &before);
    assert_eq!(sim.generation(), 0);

    Ok(())
}

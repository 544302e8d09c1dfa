use std::time::Duration;

use tracing::debug;
use tracing::info;
use tracing::trace;

use crate::CellOffset;
use crate::CellSize;
use crate::clock::Clock;
use crate::config::Config;
use crate::config::ConfigError;
use crate::engine;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// The whole simulation: board, clock and run state.
///
/// This is the only thing the frame loop mutates. Input handlers call the `request_*`,
/// `set_*` and `toggle_cell` methods, the loop calls [`Simulation::advance`] once per frame, and
/// the renderer reads [`Simulation::grid`].
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    clock: Clock,
    state: RunState,

    /// Number of steps applied since startup, or since the last resize/clear
    generation: u64,
}

impl Simulation {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.cell_count),
            clock: Clock::new(
                config.update_interval,
                config.min_interval,
                config.max_interval,
            ),
            state: RunState::Running,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update_interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Feed `delta` of wall-clock time to the clock and step the board if a tick is due.
    ///
    /// A tick that falls while paused is consumed without stepping. Returns whether a step was
    /// applied.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.clock.tick(delta) {
            return false;
        }

        if self.state == RunState::Paused {
            return false;
        }

        engine::step(&mut self.grid);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "Stepped"
        );

        true
    }

    pub fn set_running(&mut self, running: bool) {
        let state = if running {
            RunState::Running
        } else {
            RunState::Paused
        };

        if state != self.state {
            info!(?state, "Simulation state changed");
        }

        self.state = state;
    }

    /// Set the time between generations, clamped to the configured range.
    pub fn set_update_interval(&mut self, interval: Duration) {
        let interval = self.clock.set_interval(interval);

        debug!(?interval, "Update interval changed");
    }

    /// Same as [`Simulation::set_update_interval`], in seconds. NaN is ignored.
    pub fn set_update_interval_secs(&mut self, seconds: f32) {
        if seconds.is_nan() {
            return;
        }

        // Negative and infinite values land on the bounds once clamped
        let interval = Duration::try_from_secs_f32(seconds).unwrap_or(if seconds < 0.0 {
            Duration::ZERO
        } else {
            Duration::MAX
        });

        self.set_update_interval(interval);
    }

    /// Replace the board with an empty `size x size` one. Sizes below 1 are ignored.
    ///
    /// The clock and run state are left alone.
    pub fn request_resize(&mut self, size: CellSize) {
        if !self.grid.resize(size) {
            debug!(size, "Ignoring resize to non-positive size");
            return;
        }

        self.generation = 0;
        info!(size, "Grid resized");
    }

    pub fn request_clear(&mut self) {
        self.grid.clear();
        self.generation = 0;

        info!("Grid cleared");
    }

    /// Flip a cell. Coordinates off the board are ignored.
    pub fn toggle_cell(&mut self, row: CellOffset, col: CellOffset) {
        if self.grid.toggle(row, col) {
            debug!(row, col, "Toggled cell");
        } else {
            trace!(row, col, "Ignoring toggle off the board");
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid(&Config::default())
    }
}

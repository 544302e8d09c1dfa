use std::time::Duration;

use thiserror::Error;

use crate::CellSize;

/// Startup constants for the simulator.
///
/// Everything here is fixed for the lifetime of the process. The only values the user can change
/// at runtime (update interval, cell count) start out at the defaults held here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Side length of the grid created at startup
    pub cell_count: CellSize,

    /// Largest cell count the panel lets the user type in
    pub max_cell_count: CellSize,

    /// Time between two generations at startup
    pub update_interval: Duration,

    /// Shortest interval the panel slider allows
    pub min_interval: Duration,

    /// Longest interval the panel slider allows
    pub max_interval: Duration,

    /// How much one key press moves the interval slider
    pub interval_step: Duration,

    /// Width of a cell on screen, in braille dots
    pub cell_width: u16,

    /// Height of a cell on screen, in braille dots
    pub cell_height: u16,

    /// Target number of frames per second of the render loop
    pub frame_rate: u32,

    /// Number of terminal columns reserved on the left for the settings panel
    pub panel_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_count: 35,
            max_cell_count: 1000,
            update_interval: Duration::from_millis(150),
            min_interval: Duration::from_millis(100),
            max_interval: Duration::from_secs(1),
            interval_step: Duration::from_millis(50),
            cell_width: 4,
            cell_height: 4,
            frame_rate: 60,
            panel_width: 36,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cell count must be at least 1")]
    EmptyGrid,

    #[error("Cell count {count} exceeds the maximum of {max}")]
    GridTooLarge { count: CellSize, max: CellSize },

    #[error("Cell dimensions must be non-zero, got {width}x{height}")]
    EmptyCell { width: u16, height: u16 },

    #[error("Interval bounds are inverted: {min:?} > {max:?}")]
    InvertedBounds { min: Duration, max: Duration },

    #[error("Default interval {interval:?} lies outside [{min:?}, {max:?}]")]
    IntervalOutOfBounds {
        interval: Duration,
        min: Duration,
        max: Duration,
    },

    #[error("Frame rate must be non-zero")]
    NoFrameRate,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_count < 1 {
            return Err(ConfigError::EmptyGrid);
        }

        if self.cell_count > self.max_cell_count {
            return Err(ConfigError::GridTooLarge {
                count: self.cell_count,
                max: self.max_cell_count,
            });
        }

        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::EmptyCell {
                width: self.cell_width,
                height: self.cell_height,
            });
        }

        if self.min_interval > self.max_interval {
            return Err(ConfigError::InvertedBounds {
                min: self.min_interval,
                max: self.max_interval,
            });
        }

        if !(self.min_interval..=self.max_interval).contains(&self.update_interval) {
            return Err(ConfigError::IntervalOutOfBounds {
                interval: self.update_interval,
                min: self.min_interval,
                max: self.max_interval,
            });
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::NoFrameRate);
        }

        Ok(())
    }

    /// Duration of a single frame at the configured frame rate
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

pub mod app;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod engine;
pub mod events;
pub mod grid;
pub mod io;
pub mod layout;
pub mod panel;
pub mod render;
pub mod sim;

/// Side length of the grid, in cells
pub type CellSize = i32;

/// Row or column of a cell. Signed, so that positions off the board can be expressed.
pub type CellOffset = i32;

/// Position on the canvas, in braille dots
pub type DotOffset = i32;

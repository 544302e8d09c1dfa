#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SimEvent(SimEvent),
    PanelEvent(PanelEvent),
    AppEvent(AppEvent),
}

/// Actions on the simulation itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Start,
    Stop,
    Clear,
}

/// Edits to the settings panel widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Move the update rate slider one step up
    SlowDown,
    /// Move the update rate slider one step down
    SpeedUp,

    IncrementCount,
    DecrementCount,

    /// Type a digit into the cell count field
    TypeDigit(u8),

    /// Drop the last digit of the cell count field
    Backspace,

    /// Resize the grid to the cell count field
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Left mouse button released over a terminal character
    Click { column: u16, row: u16 },

    /// The terminal was resized
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}

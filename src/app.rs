use std::ops::ControlFlow;
use std::time::Duration;

use tracing::debug;

use crate::DotOffset;
use crate::canvas::Canvas;
use crate::canvas::DOTS_X;
use crate::canvas::DOTS_Y;
use crate::config::Config;
use crate::config::ConfigError;
use crate::events::AppEvent;
use crate::events::Event;
use crate::events::SimEvent;
use crate::layout::BoardLayout;
use crate::layout::Rect;
use crate::panel::FrameStats;
use crate::panel::Panel;
use crate::panel::PanelLine;
use crate::render;
use crate::sim::Simulation;

/// Everything the frame loop needs, owned in one place.
///
/// The terminal is split in two: the leftmost `panel_width` columns hold the settings panel and
/// the rest is the board area, where the grid is centred.
pub struct App {
    config: Config,
    sim: Simulation,
    panel: Panel,
    canvas: Canvas,
    stats: FrameStats,

    /// Terminal size, in characters
    cols: u16,
    rows: u16,
}

impl App {
    pub fn new(config: Config, cols: u16, rows: u16) -> Result<Self, ConfigError> {
        let sim = Simulation::new(&config)?;
        let panel = Panel::new(&config);
        let canvas = Canvas::for_terminal(cols.saturating_sub(config.panel_width), rows);

        Ok(Self {
            config,
            sim,
            panel,
            canvas,
            stats: FrameStats::default(),
            cols,
            rows,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Apply a single input event. Breaks when the application should exit.
    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::AppEvent(AppEvent::Exit) => return ControlFlow::Break(()),
            Event::AppEvent(AppEvent::Resize { cols, rows }) => self.resize(cols, rows),
            Event::AppEvent(AppEvent::Click { column, row }) => self.click(column, row),
            Event::SimEvent(SimEvent::Start) => self.sim.set_running(true),
            Event::SimEvent(SimEvent::Stop) => self.sim.set_running(false),
            Event::SimEvent(SimEvent::Clear) => self.sim.request_clear(),
            Event::PanelEvent(event) => self.panel.handle(event, &mut self.sim),
        }

        ControlFlow::Continue(())
    }

    /// Record the frame time and advance the simulation. Returns whether a step was applied.
    pub fn update(&mut self, delta: Duration) -> bool {
        self.stats = FrameStats { delta };
        self.sim.advance(delta)
    }

    /// Column of the terminal where the board area starts
    pub fn board_column(&self) -> u16 {
        self.config.panel_width.min(self.cols)
    }

    /// The board area on the canvas, in dots
    pub fn board_area(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.canvas.width() as DotOffset,
            self.canvas.height() as DotOffset,
        )
    }

    /// Where the grid sits on the canvas this frame.
    ///
    /// Recomputed every frame, so the grid stays centred across terminal and grid resizes.
    pub fn board_layout(&self) -> BoardLayout {
        BoardLayout::centered(
            self.board_area(),
            self.sim.grid().size(),
            self.config.cell_width as DotOffset,
            self.config.cell_height as DotOffset,
        )
        .aligned(DOTS_X, DOTS_Y)
    }

    /// Draw the grid and return the board area as braille text
    pub fn draw_board(&mut self) -> &str {
        let layout = self.board_layout();

        self.canvas.reset();
        render::draw_grid(&mut self.canvas, self.sim.grid(), &layout);
        self.canvas.render()
    }

    pub fn panel_lines(&self) -> Vec<PanelLine> {
        self.panel.lines(&self.sim, &self.stats)
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "Terminal resized");

        self.cols = cols;
        self.rows = rows;
        self.canvas = Canvas::for_terminal(cols.saturating_sub(self.config.panel_width), rows);
    }

    /// A click over the board toggles the cell under it, even if that is off the grid (the grid
    /// ignores it). Clicks over the panel never reach the grid.
    fn click(&mut self, column: u16, row: u16) {
        let board_column = self.board_column();
        if column < board_column || row >= self.rows {
            return;
        }

        let x = (column - board_column) as DotOffset * DOTS_X;
        let y = row as DotOffset * DOTS_Y;

        let (row, col) = self.board_layout().cell_at(x, y);
        self.sim.toggle_cell(row, col);
    }
}

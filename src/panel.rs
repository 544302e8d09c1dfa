use std::time::Duration;

use crossterm::style::Color;
use tracing::debug;

use crate::CellSize;
use crate::config::Config;
use crate::events::PanelEvent;
use crate::sim::Simulation;

/// Number of characters in the update rate slider
const SLIDER_WIDTH: usize = 20;

/// Timing of the last frame, shown at the top of the panel
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub delta: Duration,
}

impl FrameStats {
    pub fn fps(&self) -> u32 {
        if self.delta.is_zero() {
            return 0;
        }

        (1.0 / self.delta.as_secs_f32()) as u32
    }
}

/// One line of panel text, optionally coloured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    pub text: String,
    pub color: Option<Color>,
}

impl PanelLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// State of the settings panel widgets.
///
/// The update rate slider writes straight through to the simulation. The cell count field is
/// only a pending value until it is applied.
#[derive(Debug, Clone)]
pub struct Panel {
    pending_count: CellSize,
    max_count: CellSize,
    interval_step: Duration,
}

impl Panel {
    pub fn new(config: &Config) -> Self {
        Self {
            pending_count: config.cell_count,
            max_count: config.max_cell_count,
            interval_step: config.interval_step,
        }
    }

    /// The value in the cell count field
    pub fn pending_count(&self) -> CellSize {
        self.pending_count
    }

    pub fn handle(&mut self, event: PanelEvent, sim: &mut Simulation) {
        match event {
            PanelEvent::SlowDown => {
                sim.set_update_interval(sim.update_interval().saturating_add(self.interval_step));
            }
            PanelEvent::SpeedUp => {
                sim.set_update_interval(sim.update_interval().saturating_sub(self.interval_step));
            }
            PanelEvent::IncrementCount => {
                self.set_pending(self.pending_count.saturating_add(1));
            }
            PanelEvent::DecrementCount => {
                self.set_pending(self.pending_count.saturating_sub(1));
            }
            PanelEvent::TypeDigit(d) => {
                let d = d.min(9) as CellSize;
                let d = if self.pending_count < 0 { -d } else { d };

                self.set_pending(self.pending_count.saturating_mul(10).saturating_add(d));
            }
            PanelEvent::Backspace => {
                self.pending_count /= 10;
            }
            PanelEvent::Apply => {
                debug!(count = self.pending_count, "Applying cell count");
                sim.request_resize(self.pending_count);
            }
        }
    }

    fn set_pending(&mut self, count: CellSize) {
        self.pending_count = count.clamp(-self.max_count, self.max_count);
    }

    /// Lay out the panel for the current frame
    pub fn lines(&self, sim: &Simulation, stats: &FrameStats) -> Vec<PanelLine> {
        let size = sim.grid().size();

        let status = if sim.is_running() {
            PanelLine::colored("Simulation is running", Color::Green)
        } else {
            PanelLine::colored("Simulation is not running", Color::Red)
        };

        vec![
            PanelLine::plain("Simulation settings"),
            PanelLine::plain(format!("FPS: {}", stats.fps())),
            PanelLine::plain(format!("Delta time: {:.6}", stats.delta.as_secs_f32())),
            PanelLine::plain(""),
            PanelLine::plain(format!(
                "Simulation update rate: {:.2} s",
                sim.update_interval().as_secs_f32()
            )),
            PanelLine::plain(format!("[{}] -/+", slider(sim))),
            PanelLine::plain(""),
            PanelLine::plain(format!("Cell count: {}", self.pending_count)),
            PanelLine::plain("[/] adjust, Enter applies"),
            PanelLine::plain(format!("Grid: {size}x{size}")),
            PanelLine::plain(format!(
                "Generation: {}  Alive: {}",
                sim.generation(),
                sim.grid().population()
            )),
            PanelLine::plain(""),
            status,
            PanelLine::plain("s Start  x Stop  c Clear board"),
            PanelLine::plain("q Quit"),
        ]
    }
}

/// Draw the update interval as a bar within the clock bounds
fn slider(sim: &Simulation) -> String {
    let (min, max) = sim.clock().bounds();
    let range = (max - min).as_secs_f32();

    let p = if range > 0.0 {
        (sim.update_interval() - min).as_secs_f32() / range
    } else {
        1.0
    };

    let filled = ((p * SLIDER_WIDTH as f32).round() as usize).min(SLIDER_WIDTH);

    format!("{}{}", "#".repeat(filled), "-".repeat(SLIDER_WIDTH - filled))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use crossterm::style::Color;

    use super::FrameStats;
    use super::Panel;
    use crate::config::Config;
    use crate::events::PanelEvent;
    use crate::sim::Simulation;

    fn setup() -> (Panel, Simulation) {
        let config = Config::default();
        let sim = Simulation::new(&config).unwrap();

        (Panel::new(&config), sim)
    }

    fn text(panel: &Panel, sim: &Simulation, stats: &FrameStats) -> String {
        panel
            .lines(sim, stats)
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn default_panel() {
        let (panel, sim) = setup();
        let stats = FrameStats {
            delta: Duration::from_millis(20),
        };

        insta::assert_snapshot!(text(&panel, &sim, &stats), @r"
        Simulation settings
        FPS: 50
        Delta time: 0.020000

        Simulation update rate: 0.15 s
        [#-------------------] -/+

        Cell count: 35
        [/] adjust, Enter applies
        Grid: 35x35
        Generation: 0  Alive: 0

        Simulation is running
        s Start  x Stop  c Clear board
        q Quit
        ");
    }

    #[test]
    fn status_colour_follows_run_state() {
        let (panel, mut sim) = setup();
        let stats = FrameStats::default();

        let status = |sim: &Simulation| panel.lines(sim, &stats)[12].clone();

        assert_eq!(status(&sim).color, Some(Color::Green));

        sim.set_running(false);
        assert_eq!(status(&sim).text, "Simulation is not running");
        assert_eq!(status(&sim).color, Some(Color::Red));
    }

    #[test]
    fn slider_moves_in_steps_and_stops_at_bounds() {
        let (mut panel, mut sim) = setup();

        panel.handle(PanelEvent::SlowDown, &mut sim);
        assert_eq!(sim.update_interval(), Duration::from_millis(200));

        for _ in 0..10 {
            panel.handle(PanelEvent::SpeedUp, &mut sim);
        }
        assert_eq!(sim.update_interval(), Duration::from_millis(100));

        for _ in 0..100 {
            panel.handle(PanelEvent::SlowDown, &mut sim);
        }
        assert_eq!(sim.update_interval(), Duration::from_secs(1));
    }

    #[test]
    fn count_is_only_applied_on_apply() {
        let (mut panel, mut sim) = setup();

        panel.handle(PanelEvent::Backspace, &mut sim);
        panel.handle(PanelEvent::Backspace, &mut sim);
        panel.handle(PanelEvent::TypeDigit(1), &mut sim);
        panel.handle(PanelEvent::TypeDigit(2), &mut sim);
        panel.handle(PanelEvent::IncrementCount, &mut sim);

        assert_eq!(panel.pending_count(), 13);
        assert_eq!(sim.grid().size(), 35);

        panel.handle(PanelEvent::Apply, &mut sim);
        assert_eq!(sim.grid().size(), 13);
    }

    #[test]
    fn applying_non_positive_count_is_ignored() {
        let (mut panel, mut sim) = setup();
        sim.toggle_cell(4, 4);

        for _ in 0..36 {
            panel.handle(PanelEvent::DecrementCount, &mut sim);
        }
        assert_eq!(panel.pending_count(), -1);

        panel.handle(PanelEvent::Apply, &mut sim);

        assert_eq!(sim.grid().size(), 35);
        assert!(sim.grid().is_alive(4, 4));
    }

    #[test]
    fn typed_count_is_capped() {
        let (mut panel, mut sim) = setup();

        for _ in 0..6 {
            panel.handle(PanelEvent::TypeDigit(9), &mut sim);
        }

        assert_eq!(panel.pending_count(), 1000);
    }

    #[test]
    fn fps_of_zero_delta() {
        assert_eq!(FrameStats::default().fps(), 0);
    }
}

use std::fs::File;
use std::io;
use std::io::Stdout;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlife::app::App;
use gridlife::config::Config;
use gridlife::io::convert_event;

/// When set, logs are written to the file it names. The terminal itself is taken by the UI.
const LOG_ENV: &str = "GRIDLIFE_LOG";

/// Raw mode, alternate screen and mouse capture, undone on drop
struct Terminal;

impl Terminal {
    fn enter(stdout: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(Self)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };

    let path = Path::new(&path);
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn draw(stdout: &mut Stdout, app: &mut App) -> io::Result<()> {
    let board_column = app.board_column();
    let panel_width = board_column.saturating_sub(1) as usize;

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for (i, line) in app.panel_lines().into_iter().enumerate() {
        let text: String = line.text.chars().take(panel_width).collect();

        queue!(stdout, cursor::MoveTo(0, i as u16))?;
        match line.color {
            Some(color) => queue!(
                stdout,
                style::SetForegroundColor(color),
                style::Print(text),
                style::ResetColor
            )?,
            None => queue!(stdout, style::Print(text))?,
        }
    }

    for (i, line) in app.draw_board().lines().enumerate() {
        queue!(
            stdout,
            cursor::MoveTo(board_column, i as u16),
            style::Print(line)
        )?;
    }

    stdout.flush()
}

/// The frame loop: drain input, advance the simulation, draw.
fn run(stdout: &mut Stdout, app: &mut App) -> anyhow::Result<()> {
    let frame_time = app.config().frame_time();
    let mut last = Instant::now();

    'main: loop {
        let t = Instant::now();

        // Wait up to a frame for input, then take whatever else is queued
        let mut timeout = frame_time;
        while event::poll(timeout).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;

            if let Some(event) = convert_event(event) {
                if app.handle(event).is_break() {
                    break 'main;
                }
            }

            timeout = Duration::ZERO;
        }

        let now = Instant::now();
        app.update(now - last);
        last = now;

        draw(stdout, app).context("Failed to draw frame")?;

        thread::sleep(frame_time.saturating_sub(t.elapsed()));
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let (cols, rows) = terminal::size().context("Failed to get the terminal size")?;
    let mut app = App::new(Config::default(), cols, rows).context("Invalid configuration")?;

    info!(cols, rows, "Starting");

    let mut stdout = io::stdout();
    let res = {
        let _terminal = Terminal::enter(&mut stdout).context("Failed to set up the terminal")?;
        run(&mut stdout, &mut app)
    };

    info!(generation = app.sim().generation(), "Exiting");

    res
}

use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::PanelEvent;
use crate::events::SimEvent;

/// Converts a crossterm event into a gridlife event
pub fn convert_event(event: CtEvent) -> Option<Event> {
    match event {
        CtEvent::Key(key_event) => convert_key(key_event),
        CtEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Event::AppEvent(AppEvent::Click { column, row })),
        CtEvent::Resize(cols, rows) => Some(Event::AppEvent(AppEvent::Resize { cols, rows })),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    // Some platforms report releases and repeats too; only presses count
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Event::AppEvent(AppEvent::Exit),

        KeyEvent {
            code: KeyCode::Char('s'),
            ..
        } => Event::SimEvent(SimEvent::Start),
        KeyEvent {
            code: KeyCode::Char('x'),
            ..
        } => Event::SimEvent(SimEvent::Stop),
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => Event::SimEvent(SimEvent::Clear),

        KeyEvent {
            code: KeyCode::Char('+' | '='),
            ..
        } => Event::PanelEvent(PanelEvent::SlowDown),
        KeyEvent {
            code: KeyCode::Char('-' | '_'),
            ..
        } => Event::PanelEvent(PanelEvent::SpeedUp),

        KeyEvent {
            code: KeyCode::Char(']') | KeyCode::Up,
            ..
        } => Event::PanelEvent(PanelEvent::IncrementCount),
        KeyEvent {
            code: KeyCode::Char('[') | KeyCode::Down,
            ..
        } => Event::PanelEvent(PanelEvent::DecrementCount),
        KeyEvent {
            code: KeyCode::Char(c @ '0'..='9'),
            ..
        } => Event::PanelEvent(PanelEvent::TypeDigit(c as u8 - b'0')),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => Event::PanelEvent(PanelEvent::Backspace),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Event::PanelEvent(PanelEvent::Apply),

        _ => return None,
    };

    Some(event)
}

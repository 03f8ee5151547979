/// Translates raw terminal events into the normalized commands the
/// simulation consumes. Nothing here touches game state.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::entities::Level;
use crate::view::Viewport;

/// One discrete player intent for `compute::tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Flap, start, restart, or pick the hovered menu entry, depending on
    /// the current status.
    Primary,
    /// Pick a difficulty directly (menu only).
    Select(Level),
    /// Pointer position in world pixels (menu hover only).
    Pointer { x: f32, y: f32 },
    HoverPrev,
    HoverNext,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Quit,
    Command(Command),
}

/// Map one terminal event to zero or more actions. A left click produces a
/// pointer update followed by `Primary`, so the click lands where it was
/// made.
pub fn map_event(event: &Event, viewport: &Viewport) -> Vec<Action> {
    match event {
        Event::Key(key) => map_key(key).into_iter().collect(),
        Event::Mouse(mouse) => map_mouse(mouse, viewport),
        _ => Vec::new(),
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Command(Command::Primary),
        KeyCode::Char('1') => Action::Command(Command::Select(Level::Easy)),
        KeyCode::Char('2') => Action::Command(Command::Select(Level::Medium)),
        KeyCode::Char('3') => Action::Command(Command::Select(Level::Hard)),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Action::Command(Command::HoverPrev),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Action::Command(Command::HoverNext)
        }
        _ => return None,
    };
    Some(action)
}

fn map_mouse(mouse: &MouseEvent, viewport: &Viewport) -> Vec<Action> {
    let (x, y) = viewport.to_world(mouse.column, mouse.row);
    let pointer = Action::Command(Command::Pointer { x, y });
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            vec![pointer, Action::Command(Command::Primary)]
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => vec![pointer],
        _ => Vec::new(),
    }
}

//! Key binding layer for the terminal demo frontend.
//!
//! Translates crossterm key events into engine inputs. The engine itself
//! only ever sees `EngineInput`; frontends with real pointer surfaces call
//! `GameEngine::pointer_click` directly instead.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{FocusDirection, GridSize};

/// A user intention, decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineInput {
    Focus(FocusDirection),
    Activate,
    Hint,
    Undo,
    Reset,
    StartClassic(GridSize),
    StartTimed,
}

/// Map a key press to an engine input, if any.
pub fn map_key(code: KeyCode) -> Option<EngineInput> {
    match code {
        KeyCode::Up => Some(EngineInput::Focus(FocusDirection::Up)),
        KeyCode::Down => Some(EngineInput::Focus(FocusDirection::Down)),
        KeyCode::Left => Some(EngineInput::Focus(FocusDirection::Left)),
        KeyCode::Right => Some(EngineInput::Focus(FocusDirection::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(EngineInput::Activate),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(EngineInput::Hint),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(EngineInput::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(EngineInput::Reset),
        KeyCode::Char('1') => Some(EngineInput::StartClassic(GridSize::Three)),
        KeyCode::Char('2') => Some(EngineInput::StartClassic(GridSize::Four)),
        KeyCode::Char('3') => Some(EngineInput::StartClassic(GridSize::Five)),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(EngineInput::StartTimed),
        _ => None,
    }
}

/// Quit on 'q', Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

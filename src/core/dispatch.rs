//! # Command Dispatcher
//!
//! Maps a symbolic key plus the current screen to at most one [`Command`].
//! Keys with no meaning on the current screen map to `None`; on a form,
//! those keys are text input and go to the focused field instead.
//!
//! While a request is pending only cancel (Esc) and quit get through.

use super::action::Command;
use super::state::{App, Screen, ScreenKind};

/// Terminal-independent key codes. The TUI adapter translates raw
/// terminal events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

pub fn dispatch(app: &App, key: Key) -> Option<Command> {
    if key == Key::Ctrl('c') {
        return Some(Command::Quit);
    }

    let kind = app.screen.kind();
    let in_form = matches!(kind, ScreenKind::CreateForm | ScreenKind::EditForm);

    if app.is_busy() {
        return match key {
            Key::Esc => Some(Command::Back),
            Key::Char('q') if !in_form => Some(Command::Quit),
            _ => None,
        };
    }

    match kind {
        ScreenKind::List => match key {
            Key::Up | Key::Char('k') => Some(Command::MoveSelection(-1)),
            Key::Down | Key::Char('j') => Some(Command::MoveSelection(1)),
            Key::Enter => Some(Command::Activate),
            Key::Char('n') => Some(Command::NewItem),
            Key::Right | Key::PageDown | Key::Char(']') => Some(Command::NextPage),
            Key::Left | Key::PageUp | Key::Char('[') => Some(Command::PrevPage),
            Key::Char('r') => Some(Command::Refresh),
            Key::Esc | Key::Backspace => Some(Command::Back),
            Key::Char('q') => Some(Command::Quit),
            _ => None,
        },
        ScreenKind::Detail => match key {
            Key::Up | Key::Char('k') => Some(Command::MoveSelection(-1)),
            Key::Down | Key::Char('j') => Some(Command::MoveSelection(1)),
            Key::Char('e') => Some(Command::EditItem),
            Key::Char('d') => Some(Command::DeleteItem),
            Key::Char('r') => Some(Command::Refresh),
            Key::Esc | Key::Backspace | Key::Char('h') => Some(Command::Back),
            Key::Char('q') => Some(Command::Quit),
            _ => None,
        },
        ScreenKind::CreateForm | ScreenKind::EditForm => match key {
            Key::Tab => Some(Command::MoveSelection(1)),
            Key::BackTab => Some(Command::MoveSelection(-1)),
            Key::Ctrl('s') => match &app.screen {
                Screen::Form(form) => Some(Command::SubmitForm(form.form.to_draft())),
                _ => None,
            },
            Key::Esc => Some(Command::Back),
            _ => None,
        },
        ScreenKind::Confirm => match key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => Some(Command::ConfirmYes),
            Key::Char('n') | Key::Char('N') | Key::Esc => Some(Command::ConfirmNo),
            Key::Char('q') => Some(Command::Quit),
            _ => None,
        },
        ScreenKind::Error => match key {
            Key::Enter | Key::Esc | Key::Char(' ') => Some(Command::Back),
            Key::Char('q') => Some(Command::Quit),
            _ => None,
        },
    }
}

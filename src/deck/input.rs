//! Keyboard and direct numeric entry, translated into controller calls.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::deck::controller::{NavOutcome, Presentation};

/// A key the deck reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Next shot.
    ArrowRight,
    /// Previous shot.
    ArrowLeft,
    /// Printable character; digits and `-` feed numeric entry, `q` quits.
    Char(char),
    /// Commit numeric entry.
    Enter,
    /// Drop the last entered character.
    Backspace,
    /// Clear numeric entry, or quit when it is empty.
    Escape,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowRight"`, `"Enter"`, `"7"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Map a terminal key press. Releases and repeats of non-arrow keys are ignored;
    /// `Ctrl-C` maps to [`Key::Escape`].
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(event.code, KeyCode::Char('c')).then_some(Self::Escape);
        }
        match event.code {
            KeyCode::Right => Some(Self::ArrowRight),
            KeyCode::Left => Some(Self::ArrowLeft),
            _ if event.kind == KeyEventKind::Repeat => None,
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Char(c) => Some(Self::Char(c)),
            _ => None,
        }
    }
}

/// A navigation request for the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// [`Presentation::advance`].
    Advance(i64),
    /// [`Presentation::jump_to`].
    JumpTo(i64),
    /// Leave the presentation.
    Quit,
}

impl NavCommand {
    /// Run the command; `None` for [`NavCommand::Quit`].
    pub fn apply(self, presentation: &mut Presentation) -> Option<NavOutcome> {
        match self {
            Self::Advance(delta) => Some(presentation.advance(delta)),
            Self::JumpTo(index) => Some(presentation.jump_to(index)),
            Self::Quit => None,
        }
    }
}

/// Map a DOM-style key name straight to a command, without numeric entry.
pub fn command_for_key_name(name: &str) -> Option<NavCommand> {
    match Key::from_name(name)? {
        Key::ArrowRight => Some(NavCommand::Advance(1)),
        Key::ArrowLeft => Some(NavCommand::Advance(-1)),
        _ => None,
    }
}

/// Stateful key handler with a direct-entry buffer.
#[derive(Clone, Debug, Default)]
pub struct InputAdapter {
    entry: String,
}

impl InputAdapter {
    /// Adapter with an empty entry buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits typed so far, for display.
    pub fn pending_entry(&self) -> &str {
        &self.entry
    }

    /// Feed one key; returns the command it completes, if any.
    pub fn handle(&mut self, key: Key) -> Option<NavCommand> {
        match key {
            Key::ArrowRight => Some(NavCommand::Advance(1)),
            Key::ArrowLeft => Some(NavCommand::Advance(-1)),
            Key::Char(c) if c.is_ascii_digit() => {
                self.entry.push(c);
                None
            }
            Key::Char('-') if self.entry.is_empty() => {
                self.entry.push('-');
                None
            }
            Key::Char('q') => Some(NavCommand::Quit),
            Key::Char(_) => None,
            Key::Backspace => {
                self.entry.pop();
                None
            }
            Key::Enter => self.commit(),
            Key::Escape if self.entry.is_empty() => Some(NavCommand::Quit),
            Key::Escape => {
                self.entry.clear();
                None
            }
        }
    }

    fn commit(&mut self) -> Option<NavCommand> {
        let entry = std::mem::take(&mut self.entry);
        if entry.is_empty() || entry == "-" {
            return None;
        }
        // The buffer only holds an optional `-` and digits, so parsing fails on overflow alone.
        let index = entry.parse::<i64>().unwrap_or_else(|_| {
            tracing::debug!(%entry, "shot entry out of range, saturating");
            if entry.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        });
        Some(NavCommand::JumpTo(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/input.rs"]
mod tests;

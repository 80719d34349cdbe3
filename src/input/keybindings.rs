//! Default keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::models::SortField;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<KeyEvent> for KeyCombo {
    fn from(key: KeyEvent) -> Self {
        // Shift is already folded into the character for printable keys.
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        use KeyCode::*;

        let mut bindings = HashMap::new();
        let mut bind = |combo: KeyCombo, command: Command| {
            bindings.insert(combo, command);
        };

        bind(KeyCombo::ctrl(Char('c')), Command::Quit);
        bind(KeyCombo::plain(Char('q')), Command::Quit);
        bind(KeyCombo::plain(Esc), Command::DismissError);
        bind(KeyCombo::plain(Char('r')), Command::Reload);

        bind(KeyCombo::plain(Up), Command::CursorUp);
        bind(KeyCombo::plain(Char('k')), Command::CursorUp);
        bind(KeyCombo::plain(Down), Command::CursorDown);
        bind(KeyCombo::plain(Char('j')), Command::CursorDown);

        bind(KeyCombo::plain(Char(' ')), Command::ToggleRow);
        bind(KeyCombo::plain(Char('a')), Command::ToggleAll);
        bind(KeyCombo::plain(Enter), Command::ToggleExpand);

        bind(KeyCombo::plain(Char('1')), Command::SortBy(SortField::SeqNo));
        bind(KeyCombo::plain(Char('2')), Command::SortBy(SortField::Description));
        bind(KeyCombo::plain(Char('3')), Command::SortBy(SortField::Duration));

        bind(KeyCombo::plain(Right), Command::NextPage);
        bind(KeyCombo::plain(Char('n')), Command::NextPage);
        bind(KeyCombo::plain(Left), Command::PreviousPage);
        bind(KeyCombo::plain(Char('p')), Command::PreviousPage);
        bind(KeyCombo::plain(Char('+')), Command::LargerPageSize);
        bind(KeyCombo::plain(Char('=')), Command::LargerPageSize);
        bind(KeyCombo::plain(Char('-')), Command::SmallerPageSize);

        Self { bindings }
    }

    pub fn command_for(&self, key: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyCombo::from(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

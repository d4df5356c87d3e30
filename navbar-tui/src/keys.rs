use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

/// Modifier keys currently held down.
///
/// Updated only from key-down and key-up events. Terminals that do not
/// report bare modifier presses still set the flag through the modifiers
/// carried on each key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift_held: bool,
}

impl ModifierState {
    pub fn key_down(&mut self, key: &KeyEvent) {
        if is_shift(key.code) {
            self.shift_held = true;
        } else {
            self.shift_held = key.modifiers.contains(KeyModifiers::SHIFT);
        }
    }

    pub fn key_up(&mut self, key: &KeyEvent) {
        if is_shift(key.code) {
            self.shift_held = false;
        }
    }

    /// Route a raw event to `key_down` or `key_up` by its kind.
    pub fn track(&mut self, key: &KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.key_down(key),
            KeyEventKind::Release => self.key_up(key),
        }
    }
}

fn is_shift(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
    )
}

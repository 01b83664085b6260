//! Open/closed state and keyboard highlight of a select.

use termdom::Key;

/// What a key press did to the interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key means nothing to a select.
    Ignored,
    /// State may have changed; nothing to commit.
    Handled,
    /// The list closed with this option index highlighted.
    Commit(usize),
}

/// Widget-owned interaction state.
///
/// `highlighted_index` is reset to 0 every time the list opens and moves
/// one row at a time without wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    is_open: bool,
    highlighted_index: usize,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    /// Open or close the list. Returns whether the state changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        if open {
            self.highlighted_index = 0;
        }
        log::debug!("select {}", if open { "opened" } else { "closed" });
        true
    }

    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// Flip the open state, returning whether the list was open before.
    pub fn toggle(&mut self) -> bool {
        let was_open = self.is_open;
        self.set_open(!was_open);
        was_open
    }

    /// Highlight `index` directly (pointer hover).
    pub fn highlight(&mut self, index: usize) -> bool {
        let changed = self.highlighted_index != index;
        self.highlighted_index = index;
        changed
    }

    /// Move the highlight by one row, ignoring moves that leave `[0, len)`.
    pub fn move_highlight(&mut self, down: bool, len: usize) -> bool {
        let next = if down {
            self.highlighted_index.checked_add(1).filter(|&i| i < len)
        } else {
            self.highlighted_index.checked_sub(1)
        };
        match next {
            Some(index) => self.highlight(index),
            None => false,
        }
    }

    /// Apply a key press with `len` options in the list.
    pub fn handle_key(&mut self, key: Key, len: usize) -> KeyOutcome {
        match key {
            Key::Enter | Key::Space | Key::Char(' ') => {
                if self.toggle() {
                    KeyOutcome::Commit(self.highlighted_index)
                } else {
                    KeyOutcome::Handled
                }
            }
            Key::Up | Key::Down => {
                if self.is_open {
                    self.move_highlight(key == Key::Down, len);
                } else {
                    self.open();
                }
                KeyOutcome::Handled
            }
            Key::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_resets_highlight() {
        let mut state = InteractionState::new();
        state.open();
        state.highlight(2);
        state.close();
        assert_eq!(state.highlighted_index(), 2);

        state.open();
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_arrow_opens_closed_list() {
        let mut state = InteractionState::new();
        state.highlight(1);

        assert_eq!(state.handle_key(Key::Up, 3), KeyOutcome::Handled);
        assert!(state.is_open());
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_highlight_clamps() {
        let mut state = InteractionState::new();
        state.open();

        state.handle_key(Key::Up, 3);
        assert_eq!(state.highlighted_index(), 0);

        state.handle_key(Key::Down, 3);
        state.handle_key(Key::Down, 3);
        state.handle_key(Key::Down, 3);
        assert_eq!(state.highlighted_index(), 2);
    }

    #[test]
    fn test_empty_list_never_moves() {
        let mut state = InteractionState::new();
        state.open();
        assert!(!state.move_highlight(true, 0));
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_enter_commits_when_closing() {
        let mut state = InteractionState::new();
        assert_eq!(state.handle_key(Key::Enter, 3), KeyOutcome::Handled);
        state.handle_key(Key::Down, 3);
        assert_eq!(state.handle_key(Key::Space, 3), KeyOutcome::Commit(1));
        assert!(!state.is_open());
    }

    #[test]
    fn test_escape_and_other_keys() {
        let mut state = InteractionState::new();
        state.open();
        assert_eq!(state.handle_key(Key::Char('x'), 3), KeyOutcome::Ignored);
        assert!(state.is_open());
        assert_eq!(state.handle_key(Key::Escape, 3), KeyOutcome::Handled);
        assert!(!state.is_open());
    }
}

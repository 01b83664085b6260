//! Input events as the element tree sees them.

/// An input event, resolved against the element tree where it has a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, aimed at the focused element if any.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press, aimed at the innermost clickable element under the pointer.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    MouseMove { x: u16, y: u16 },
    Focus { target: String },
    Blur { target: String },
    Resize { width: u16, height: u16 },
}

/// Keys the framework distinguishes. Everything else arrives as
/// [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    /// The space bar. Never reported as `Char(' ')`.
    Space,
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as Ct;
        match code {
            Ct::Char(' ') => Key::Space,
            Ct::Char(c) => Key::Char(c),
            Ct::Enter => Key::Enter,
            Ct::Tab => Key::Tab,
            Ct::BackTab => Key::BackTab,
            Ct::Esc => Key::Escape,
            Ct::Up => Key::Up,
            Ct::Down => Key::Down,
            Ct::Left => Key::Left,
            Ct::Right => Key::Right,
            _ => Key::Unknown,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as Ct;
        Self {
            shift: mods.intersects(Ct::SHIFT),
            ctrl: mods.intersects(Ct::CONTROL),
            alt: mods.intersects(Ct::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as Ct;
        match button {
            Ct::Left => MouseButton::Left,
            Ct::Right => MouseButton::Right,
            Ct::Middle => MouseButton::Middle,
        }
    }
}

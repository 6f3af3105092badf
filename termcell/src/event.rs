use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};

/// Input events, already filtered down to what widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press (repeats included, releases dropped)
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed at a cell
    Click { x: u16, y: u16, button: MouseButton },
    /// Pointer moved (for hover highlighting)
    MouseMove { x: u16, y: u16 },
    /// Wheel scrolled; negative is up
    Scroll { x: u16, y: u16, delta: i16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Shorthand for a key press without modifiers.
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Shorthand for a left click.
    pub fn click(x: u16, y: u16) -> Self {
        Event::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Translate a raw crossterm event. Returns `None` for events nothing
    /// here handles (key releases, focus changes, paste, unknown keys).
    pub fn from_crossterm(event: CtEvent) -> Option<Self> {
        match event {
            CtEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                Some(Event::Key {
                    key: Key::from_code(key_event.code)?,
                    modifiers: key_event.modifiers.into(),
                })
            }
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        })
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

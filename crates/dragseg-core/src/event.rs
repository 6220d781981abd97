#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The reorder widget never talks to a terminal or a browser directly; hosts
//! translate their native notifications into these values and feed them to
//! the widget's event handler.
//!
//! # Design Notes
//!
//! - Mouse and touch coordinates are 0-indexed cells
//! - `KeyEventKind` defaults to `Press` when not available from the host
//! - `Modifiers` use bitflags for easy combination
//! - A touch event carries the *changed* touch points only; an `End` with an
//!   empty list means the host lost the release point

use bitflags::bitflags;

use crate::geometry::Position;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// A touch event.
    Touch(TouchEvent),

    /// Host surface was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Delete,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// The pointer location.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),

    /// Mouse button released.
    Up(MouseButton),

    /// Mouse dragged while button held.
    Drag(MouseButton),

    /// Mouse moved (no button pressed).
    Moved,

    ScrollUp,
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Phase for touch events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One changed touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchPoint {
    pub id: u32,
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(id: u32, x: u16, y: u16) -> Self {
        Self { id, x, y }
    }

    /// The touch location.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A touch event with the points that changed in this phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Touch event with a single changed point.
    #[must_use]
    pub fn single(phase: TouchPhase, x: u16, y: u16) -> Self {
        Self {
            phase,
            touches: vec![TouchPoint::new(0, x, y)],
        }
    }

    /// Touch event that carries no points (e.g. a release the host lost track of).
    #[must_use]
    pub fn empty(phase: TouchPhase) -> Self {
        Self {
            phase,
            touches: Vec::new(),
        }
    }

    /// The first changed point, if any.
    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

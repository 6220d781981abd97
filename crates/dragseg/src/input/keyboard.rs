#![forbid(unsafe_code)]

//! Keyboard navigation and keyboard moves.
//!
//! Keys act on the focused item. Each directional key has two meanings:
//!
//! | Focused item | Effect |
//! |--------------|--------|
//! | not selected | move focus to the neighbour, data untouched |
//! | selected     | move the item there, keep it selected |
//!
//! Left/right wrap within the container. Up scans forward through the
//! containers (`c + 1, c + 2, ...` modulo the count), Down scans backward.
//! A move stops at the first container that accepts the item; if none
//! does, the key is a no-op.

use dragseg_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

use crate::constraint::{SlotModel, can_move};
use crate::element::ItemPos;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// True for the direction that increases the item or container index.
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Up | Self::Right)
    }
}

/// A key mapped to a board command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Step(Direction),
    ToggleSelect,
}

/// Map a key event to a command. Releases and chorded keys are ignored.
#[must_use]
pub fn command_for(key: &KeyEvent, letter_keys: bool) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::SUPER)
    {
        return None;
    }
    let direction = match key.code {
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Enter => return Some(KeyCommand::ToggleSelect),
        KeyCode::Char(c) if letter_keys => match c {
            'a' => Direction::Left,
            'd' => Direction::Right,
            'w' => Direction::Up,
            's' => Direction::Down,
            _ => return None,
        },
        _ => return None,
    };
    Some(KeyCommand::Step(direction))
}

/// Outcome of a directional key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPlan {
    /// Focus the item at this position.
    Focus(ItemPos),
    /// Move the item; `to` is a post-removal insertion point.
    Move { from: ItemPos, to: ItemPos },
    /// Nothing to do.
    Stay,
}

/// Plan a directional key for the focused item at `from`.
///
/// `moving` is true when the focused item is selected.
#[must_use]
pub fn plan_step<M: SlotModel + ?Sized>(
    model: &M,
    from: ItemPos,
    direction: Direction,
    moving: bool,
) -> KeyPlan {
    if direction.is_vertical() {
        plan_vertical(model, from, direction.is_forward(), moving)
    } else {
        plan_horizontal(model, from, direction.is_forward(), moving)
    }
}

fn plan_horizontal<M: SlotModel + ?Sized>(
    model: &M,
    from: ItemPos,
    forward: bool,
    moving: bool,
) -> KeyPlan {
    let len = model.container_len(from.container);
    if len == 0 {
        return KeyPlan::Stay;
    }
    let index = if forward {
        (from.index + 1) % len
    } else {
        (from.index + len - 1) % len
    };
    let to = ItemPos::new(from.container, index);
    if moving {
        KeyPlan::Move { from, to }
    } else if index == from.index {
        KeyPlan::Stay
    } else {
        KeyPlan::Focus(to)
    }
}

fn plan_vertical<M: SlotModel + ?Sized>(
    model: &M,
    from: ItemPos,
    forward: bool,
    moving: bool,
) -> KeyPlan {
    let count = model.container_count();
    for rel in 1..count {
        let container = if forward {
            (from.container + rel) % count
        } else {
            (from.container + count - rel) % count
        };
        let len = model.container_len(container);
        if moving {
            let to = ItemPos::new(container, from.index.min(len));
            if can_move(model, from, to) {
                return KeyPlan::Move { from, to };
            }
        } else if len > 0 {
            return KeyPlan::Focus(ItemPos::new(container, from.index.min(len - 1)));
        }
    }
    KeyPlan::Stay
}

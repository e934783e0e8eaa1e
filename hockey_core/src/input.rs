//! Keyboard input tracking

use std::collections::HashSet;

use glam::Vec2;

/// Directional keys the human paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style key name, ignoring anything that is not a direction
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }

    /// Unit push in the human's own frame (up = towards the opponent)
    fn direction(self) -> Vec2 {
        match self {
            Key::Up => Vec2::Y,
            Key::Down => Vec2::NEG_Y,
            Key::Left => Vec2::NEG_X,
            Key::Right => Vec2::X,
        }
    }
}

/// Set of directional keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Sum of the held directions scaled by `magnitude`, in the human's frame.
    ///
    /// `None` when nothing is held. Opposite keys cancel to a zero vector but
    /// still count as input. Diagonals are not normalized.
    pub fn resultant_force(&self, magnitude: f32) -> Option<Vec2> {
        if self.held.is_empty() {
            return None;
        }
        Some(
            self.held
                .iter()
                .map(|key| key.direction() * magnitude)
                .sum(),
        )
    }
}

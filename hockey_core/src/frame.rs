//! Own-side coordinate frames
//!
//! World coordinates put the AI goal line at y = 0 and the human goal line at
//! y = H. Each side sees the rink through its own frame instead: origin at the
//! near-left corner, own goal behind at y = 0, opponent ahead. Confinement and
//! AI logic are written once against that frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which player a paddle or a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    /// Convert a world position into this side's frame.
    pub fn to_own_frame(self, abs: Vec2, rink: Vec2) -> Vec2 {
        match self {
            Side::Human => Vec2::new(abs.x, rink.y - abs.y),
            Side::Ai => Vec2::new(rink.x - abs.x, abs.y),
        }
    }

    /// Convert a force (or any direction) from this side's frame back to world.
    pub fn force_to_world(self, rel: Vec2) -> Vec2 {
        match self {
            Side::Human => Vec2::new(rel.x, -rel.y),
            Side::Ai => Vec2::new(-rel.x, rel.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RINK: Vec2 = Vec2::new(500.0, 800.0);

    #[test]
    fn test_human_frame_flips_y() {
        let rel = Side::Human.to_own_frame(Vec2::new(100.0, 700.0), RINK);
        assert_eq!(rel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ai_frame_flips_x() {
        let rel = Side::Ai.to_own_frame(Vec2::new(100.0, 100.0), RINK);
        assert_eq!(rel, Vec2::new(400.0, 100.0));
    }

    #[test]
    fn test_start_positions_are_mirrored() {
        let human = Side::Human.to_own_frame(Vec2::new(250.0, 700.0), RINK);
        let ai = Side::Ai.to_own_frame(Vec2::new(250.0, 100.0), RINK);
        assert_eq!(human, ai);
    }

    #[test]
    fn test_forward_force_points_at_opponent() {
        let forward = Vec2::new(0.0, 1.0);
        // Human defends y = H, so forward is towards y = 0
        assert!(Side::Human.force_to_world(forward).y < 0.0);
        assert!(Side::Ai.force_to_world(forward).y > 0.0);
    }
}

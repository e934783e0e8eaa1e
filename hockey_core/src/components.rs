use glam::Vec2;

use crate::Side;

/// Rigid body state shared with the physics engine.
///
/// The engine owns `pos` and `vel` and integrates them; game logic reads
/// `pos` and only ever adds to `force`. The accumulator is emptied by
/// [`clear_forces`](crate::clear_forces) once the engine has consumed it.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub force: Vec2,
    pub mass: f32,
}

impl Body {
    pub fn new(pos: Vec2, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
        }
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Move the body without going through the force accumulator
    pub fn teleport(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// Paddle component - marks a body as a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Puck component - marks the body the referee watches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Puck;

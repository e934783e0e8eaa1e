use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point for `side` and return its new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        };
        *points = points.saturating_add(1);
        *points
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }
}

/// Presentation hook called once per goal with the scorer's new total.
pub trait ScoreSink: Send {
    fn show(&mut self, side: Side, points: u32);
}

impl<F: FnMut(Side, u32) + Send> ScoreSink for F {
    fn show(&mut self, side: Side, points: u32) {
        self(side, points)
    }
}

/// Random number generator
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub human_scored: bool,
    pub ai_scored: bool,
    pub respawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.human_scored = false;
        self.ai_scored = false;
        self.respawned = false;
    }

    pub fn record_goal(&mut self, side: Side) {
        match side {
            Side::Human => self.human_scored = true,
            Side::Ai => self.ai_scored = true,
        }
    }
}

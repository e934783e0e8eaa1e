//! Rule-based opponent
//!
//! Everything here works in the AI's own frame. The opponent is deliberately
//! sloppy: every push is scaled by a random accuracy factor drawn from
//! `[rmin, 1]`, so with a negative `rmin` it sometimes moves the wrong way.

use glam::Vec2;
use rand::Rng;

use crate::Config;

/// Coarse behaviour picked fresh every tick from puck and paddle positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiRegime {
    /// Puck is in the opponent's half: fall back to the home line and centre.
    Defend,
    /// Puck is level with or behind the paddle: back off and flail sideways.
    Recover,
    /// Puck is ahead in our half: steer straight at it.
    Chase,
}

impl AiRegime {
    pub fn classify(paddle: Vec2, puck: Vec2, config: &Config) -> Self {
        if puck.y > config.midline() {
            AiRegime::Defend
        } else if paddle.y > puck.y - config.ai.lost_puck_margin {
            AiRegime::Recover
        } else {
            AiRegime::Chase
        }
    }
}

/// Per-paddle controller state kept on the AI paddle entity
#[derive(Debug, Clone, Copy, Default)]
pub struct AiBrain {
    pub regime: Option<AiRegime>,
}

impl AiBrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the regime for this tick and return the force it produces.
    pub fn think<R: Rng>(
        &mut self,
        paddle: Vec2,
        puck: Vec2,
        config: &Config,
        rng: &mut R,
    ) -> Vec2 {
        let regime = AiRegime::classify(paddle, puck, config);
        if self.regime != Some(regime) {
            log::debug!("AI regime {:?} -> {:?}", self.regime, regime);
            self.regime = Some(regime);
        }
        ai_force(regime, paddle, puck, config, rng)
    }
}

/// Force the AI wants to apply, in its own frame.
///
/// Expects a validated `config`; an `rmin` above 1 or a negative spread would
/// leave nothing to draw from.
pub fn ai_force<R: Rng>(
    regime: AiRegime,
    paddle: Vec2,
    puck: Vec2,
    config: &Config,
    rng: &mut R,
) -> Vec2 {
    let ai = &config.ai;
    let f = ai.force;
    let mut force = Vec2::ZERO;

    match regime {
        AiRegime::Defend => {
            if paddle.y > ai.home_y && paddle.y < config.rink_height {
                force.y -= f;
            }
            let center = config.rink_width / 2.0;
            if paddle.x > center + ai.center_tolerance {
                force.x -= f;
            } else if paddle.x < center - ai.center_tolerance {
                force.x += f;
            }
        }
        AiRegime::Recover => {
            let half_spread = ai.fluster_spread / 2.0;
            force.x += f * rng.gen_range(-half_spread..=half_spread);
            force.y -= f * accuracy(ai.rmin, rng);
        }
        AiRegime::Chase => {
            let dir = chase_direction(paddle, puck);
            force.y += dir.y * f * accuracy(ai.rmin, rng);
            force.x += dir.x * f * accuracy(ai.rmin, rng);
        }
    }

    force
}

/// Unit steps towards the puck, one per axis. Ties push towards own -x / -y.
pub fn chase_direction(paddle: Vec2, puck: Vec2) -> Vec2 {
    let step = |from: f32, to: f32| if from < to { 1.0 } else { -1.0 };
    Vec2::new(step(paddle.x, puck.x), step(paddle.y, puck.y))
}

fn accuracy<R: Rng>(rmin: f32, rng: &mut R) -> f32 {
    rng.gen_range(rmin..=1.0)
}

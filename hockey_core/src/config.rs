use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// Difficulty knobs of the rule-based opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    pub force: f32,
    /// Lower bound of the per-tick accuracy factor, upper bound is 1.
    pub rmin: f32,
    pub home_y: f32,
    pub center_tolerance: f32,
    pub lost_puck_margin: f32,
    pub fluster_spread: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            force: Params::AI_FORCE,
            rmin: Params::AI_RMIN,
            home_y: Params::AI_HOME_Y,
            center_tolerance: Params::AI_CENTER_TOLERANCE,
            lost_puck_margin: Params::AI_LOST_PUCK_MARGIN,
            fluster_spread: Params::AI_FLUSTER_SPREAD,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rink_width: f32,
    pub rink_height: f32,
    pub wall_thickness: f32,
    pub paddle_radius: f32,
    pub paddle_mass: f32,
    pub paddle_friction_air: f32,
    pub paddle_start_offset: f32,
    pub puck_radius: f32,
    pub puck_mass: f32,
    pub puck_restitution: f32,
    pub puck_friction_air: f32,
    pub key_force: f32,
    pub confinement_stiffness: f32,
    pub ai: AiTuning,
    pub respawn_x_margin: f32,
    pub respawn_y_min: f32,
    pub respawn_y_max_margin: f32,
    pub respawn_max_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rink_width: Params::RINK_WIDTH,
            rink_height: Params::RINK_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_radius: Params::PADDLE_RADIUS,
            paddle_mass: Params::PADDLE_MASS,
            paddle_friction_air: Params::PADDLE_FRICTION_AIR,
            paddle_start_offset: Params::PADDLE_START_OFFSET,
            puck_radius: Params::PUCK_RADIUS,
            puck_mass: Params::PUCK_MASS,
            puck_restitution: Params::PUCK_RESTITUTION,
            puck_friction_air: Params::PUCK_FRICTION_AIR,
            key_force: Params::KEY_FORCE,
            confinement_stiffness: Params::CONFINEMENT_STIFFNESS,
            ai: AiTuning::default(),
            respawn_x_margin: Params::RESPAWN_X_MARGIN,
            respawn_y_min: Params::RESPAWN_Y_MIN,
            respawn_y_max_margin: Params::RESPAWN_Y_MAX_MARGIN,
            respawn_max_speed: Params::RESPAWN_MAX_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.rink_width, self.rink_height)
    }

    /// Depth of one half, measured from either goal line
    pub fn midline(&self) -> f32 {
        self.rink_height / 2.0
    }

    pub fn goal_mouth_width(&self) -> f32 {
        self.rink_width / 4.0
    }

    /// How far past a goal line the puck centre must travel to count.
    pub fn goal_margin(&self) -> f32 {
        self.puck_radius
    }

    /// Deepest legal own-frame y before the paddle crosses into the other half
    pub fn forward_limit(&self) -> f32 {
        self.midline() - self.paddle_radius
    }

    /// Shallowest legal own-frame y before the paddle enters its own goal mouth
    pub fn back_limit(&self) -> f32 {
        self.paddle_radius
    }

    pub fn paddle_start(&self, side: Side) -> Vec2 {
        let x = self.rink_width / 2.0;
        match side {
            Side::Human => Vec2::new(x, self.rink_height - self.paddle_start_offset),
            Side::Ai => Vec2::new(x, self.paddle_start_offset),
        }
    }

    pub fn puck_start(&self) -> Vec2 {
        self.size() / 2.0
    }

    pub fn respawn_x_range(&self) -> (f32, f32) {
        (self.respawn_x_margin, self.rink_width - self.respawn_x_margin)
    }

    pub fn respawn_y_range(&self) -> (f32, f32) {
        (self.respawn_y_min, self.rink_height - self.respawn_y_max_margin)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.rink_width, self.rink_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidRink { width, height });
        }

        positive("paddle_radius", self.paddle_radius)?;
        positive("paddle_mass", self.paddle_mass)?;
        positive("puck_radius", self.puck_radius)?;
        positive("puck_mass", self.puck_mass)?;

        if 2.0 * self.paddle_radius >= self.midline() {
            return Err(ConfigError::NoLegalBand {
                radius: self.paddle_radius,
                half: self.midline(),
            });
        }

        finite("wall_thickness", self.wall_thickness)?;
        finite("paddle_friction_air", self.paddle_friction_air)?;
        finite("paddle_start_offset", self.paddle_start_offset)?;
        finite("puck_restitution", self.puck_restitution)?;
        finite("puck_friction_air", self.puck_friction_air)?;
        finite("key_force", self.key_force)?;
        finite("confinement_stiffness", self.confinement_stiffness)?;
        finite("ai.force", self.ai.force)?;
        finite("ai.home_y", self.ai.home_y)?;
        finite("ai.center_tolerance", self.ai.center_tolerance)?;
        finite("ai.lost_puck_margin", self.ai.lost_puck_margin)?;

        if !(-1.0..=1.0).contains(&self.ai.rmin) {
            return Err(ConfigError::RminOutOfRange(self.ai.rmin));
        }

        for (axis, (min, max)) in [('x', self.respawn_x_range()), ('y', self.respawn_y_range())] {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigError::EmptyRespawnRange { axis, min, max });
            }
        }

        not_negative("ai.fluster_spread", self.ai.fluster_spread)?;
        not_negative("respawn_max_speed", self.respawn_max_speed)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn not_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

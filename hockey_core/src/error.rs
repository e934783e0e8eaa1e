use thiserror::Error;

/// Reasons a [`Config`](crate::Config) is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rink size must be positive and finite, got {width}x{height}")]
    InvalidRink { width: f32, height: f32 },

    #[error("paddle radius {radius} leaves no legal band in a half of depth {half}")]
    NoLegalBand { radius: f32, half: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("AI rmin must lie in [-1, 1], got {0}")]
    RminOutOfRange(f32),

    #[error("respawn {axis} range is empty: [{min}, {max}]")]
    EmptyRespawnRange { axis: char, min: f32, max: f32 },
}

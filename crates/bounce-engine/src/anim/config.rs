use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::state::{AnimationState, PulsePhase};
use crate::coords::Vec3;

/// Thresholds and factors driving the scale pulse.
///
/// Once the cumulative scale falls to `low` the multiplier becomes `grow`;
/// once it reaches `high` the multiplier becomes `shrink`. The scale is never
/// clamped, so it can overshoot either threshold by one frame's worth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PulseConfig {
    pub low: f32,
    pub high: f32,
    pub grow: f32,
    pub shrink: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            low: 0.2,
            high: 0.6,
            grow: 1.008,
            shrink: 0.988,
        }
    }
}

impl PulseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("pulse.low", self.low)?;
        finite("pulse.high", self.high)?;
        finite("pulse.grow", self.grow)?;
        finite("pulse.shrink", self.shrink)?;
        positive("pulse.low", self.low)?;
        if self.low >= self.high {
            return Err(ConfigError::ThresholdOrder { low: self.low, high: self.high });
        }
        if self.grow <= 1.0 {
            return Err(ConfigError::GrowFactor(self.grow));
        }
        if self.shrink <= 0.0 || self.shrink >= 1.0 {
            return Err(ConfigError::ShrinkFactor(self.shrink));
        }
        Ok(())
    }

    /// Multiplier for the next frame given the updated cumulative scale.
    ///
    /// The low check runs before the high check; with a valid config at most
    /// one of them can fire.
    pub fn next_multiplier(&self, scale: f32, multiplier: f32) -> f32 {
        let mut next = multiplier;
        if scale <= self.low {
            next = self.grow;
        }
        if scale >= self.high {
            next = self.shrink;
        }
        next
    }

    /// Phase implied by a multiplier value, if it is one of the two factors.
    pub(crate) fn phase_of(&self, multiplier: f32) -> Option<PulsePhase> {
        if multiplier == self.grow {
            Some(PulsePhase::Growing)
        } else if multiplier == self.shrink {
            Some(PulsePhase::Shrinking)
        } else {
            None
        }
    }
}

/// Full animator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Initial per-frame translation.
    pub direction: Vec3,
    /// Multiplier used until the pulse first switches.
    pub initial_multiplier: f32,
    pub pulse: PulseConfig,
    /// Distance of the reflecting walls from the origin on x and y.
    pub wall: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Preset::Pulse.config()
    }
}

impl AnimationConfig {
    pub fn direction(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }

    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.initial_multiplier = multiplier;
        self
    }

    pub fn pulse(mut self, pulse: PulseConfig) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn wall(mut self, wall: f32) -> Self {
        self.wall = wall;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.direction.is_finite() {
            return Err(ConfigError::NonFinite { field: "direction" });
        }
        finite("initial_multiplier", self.initial_multiplier)?;
        positive("initial_multiplier", self.initial_multiplier)?;
        finite("wall", self.wall)?;
        positive("wall", self.wall)?;
        self.pulse.validate()
    }

    /// State at frame zero.
    pub fn initial_state(&self) -> AnimationState {
        AnimationState::new(self.direction, self.initial_multiplier)
    }
}

/// Named configurations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Preset {
    /// Shrinks to a fifth of the starting size, then pulses between 0.2 and 0.6.
    #[default]
    Pulse,
    /// Slow pulse in a wide band around the starting size.
    Breathe,
    /// Translation and bouncing only.
    Drift,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Pulse, Preset::Breathe, Preset::Drift];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Pulse => "pulse",
            Preset::Breathe => "breathe",
            Preset::Drift => "drift",
        }
    }

    pub fn config(self) -> AnimationConfig {
        match self {
            Preset::Pulse => AnimationConfig {
                direction: Vec3::xy(0.005, 0.005),
                initial_multiplier: 0.888,
                pulse: PulseConfig::default(),
                wall: 1.0,
            },
            Preset::Breathe => AnimationConfig {
                direction: Vec3::xy(0.003, 0.004),
                initial_multiplier: 1.01,
                pulse: PulseConfig {
                    low: 0.5,
                    high: 1.5,
                    grow: 1.01,
                    shrink: 0.988,
                },
                wall: 1.0,
            },
            // Scale stays at exactly 1, strictly inside the band, so the
            // multiplier never switches away from 1.
            Preset::Drift => AnimationConfig {
                direction: Vec3::xy(0.01, 0.007),
                initial_multiplier: 1.0,
                pulse: PulseConfig {
                    low: 0.5,
                    high: 1.5,
                    grow: 1.01,
                    shrink: 0.99,
                },
                wall: 1.0,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() { Ok(()) } else { Err(ConfigError::NonFinite { field }) }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 { Ok(()) } else { Err(ConfigError::NonPositive { field, value }) }
}

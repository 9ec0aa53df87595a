use super::config::AnimationConfig;
use super::error::ConfigError;
use super::state::AnimationState;
use super::step::{step, StepOutcome};
use crate::geometry::Positioned;

/// Owns a point set together with its animation state and config.
///
/// Intended usage is one animator per animated shape, advanced once per frame
/// by the loop that owns it.
#[derive(Debug, Clone)]
pub struct BounceAnimator<P> {
    points: Vec<P>,
    state: AnimationState,
    config: AnimationConfig,
    frame: u64,
}

impl<P: Positioned> BounceAnimator<P> {
    /// Validates `config` and starts from its initial state.
    pub fn new(points: Vec<P>, config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = config.initial_state();
        log::debug!(
            "animator created: {} points, direction=({}, {}), multiplier={}",
            points.len(),
            state.direction.x,
            state.direction.y,
            state.multiplier,
        );
        Ok(Self { points, state, config, frame: 0 })
    }

    /// Runs one frame and returns what happened.
    pub fn advance(&mut self) -> StepOutcome {
        let outcome = step(&mut self.points, self.state, &self.config);
        self.state = outcome.state;
        self.frame = self.frame.wrapping_add(1);

        if outcome.reflection.x {
            log::debug!("frame {}: bounced on x, direction.x={}", self.frame, self.state.direction.x);
        }
        if outcome.reflection.y {
            log::debug!("frame {}: bounced on y, direction.y={}", self.frame, self.state.direction.y);
        }
        if let Some(phase) = outcome.pulse {
            log::debug!(
                "frame {}: pulse {:?} at scale {:.4}, multiplier={}",
                self.frame,
                phase,
                self.state.scale,
                self.state.multiplier,
            );
        }

        outcome
    }

    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Number of frames advanced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

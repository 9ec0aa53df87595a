//! Per-frame bounce/pulse animation.
//!
//! One frame, in order:
//! 1. translate the point set by the current direction
//! 2. measure its bounding box
//! 3. scale it about the box center by the current multiplier
//! 4. fold the multiplier into the cumulative scale and switch between the
//!    grow/shrink factors at the configured thresholds
//! 5. reflect the direction off the walls on x, then on y
//!
//! [`step`] is the pure form: it takes the state by value and returns the next
//! one. [`BounceAnimator`] owns points, state and config for use inside a loop.

mod animator;
mod config;
mod error;
mod state;
mod step;
mod walls;

pub use animator::BounceAnimator;
pub use config::{AnimationConfig, Preset, PulseConfig};
pub use error::ConfigError;
pub use state::{AnimationState, PulsePhase};
pub use step::{step, StepOutcome};
pub use walls::{reflect_direction, Reflection};

use crate::anim::{AnimationState, StepOutcome};
use crate::coords::Bounds;
use crate::time::FrameTime;

/// Directive returned by per-frame callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameControl {
    Continue,
    Exit,
}

/// What the loop observed on one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameReport {
    pub time: FrameTime,
    pub outcome: StepOutcome,
    /// Extent of the uploaded vertices. `None` for an empty set.
    pub bounds: Option<Bounds>,
}

/// Totals for a finished run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Frames on which either axis reflected.
    pub bounces: u64,
    /// Frames on which the pulse switched factor.
    pub pulse_switches: u64,
    pub final_state: AnimationState,
}

impl RunSummary {
    pub(super) fn new(initial: AnimationState) -> Self {
        Self { frames: 0, bounces: 0, pulse_switches: 0, final_state: initial }
    }

    pub(super) fn record(&mut self, outcome: &StepOutcome) {
        self.frames += 1;
        if outcome.reflection.any() {
            self.bounces += 1;
        }
        if outcome.pulse.is_some() {
            self.pulse_switches += 1;
        }
        self.final_state = outcome.state;
    }
}

use super::config::AnimationConfig;
use super::state::{AnimationState, PulsePhase};
use super::walls::{reflect_direction, Reflection};
use crate::coords::Vec3;
use crate::geometry::{bounding_box, scale_about, translate, Positioned};

/// Result of one animation frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepOutcome {
    /// State to feed into the next frame.
    pub state: AnimationState,
    /// Center the set was scaled about. `None` for an empty set.
    pub center: Option<Vec3>,
    /// Axes whose direction was reflected.
    pub reflection: Reflection,
    /// Set when the multiplier switched to a different factor this frame.
    pub pulse: Option<PulsePhase>,
}

/// Advances `points` by one frame and returns the next state.
///
/// `points` is updated in place; `state` is consumed and the successor is
/// returned in the outcome. An empty set still advances the cumulative scale.
pub fn step<P: Positioned>(
    points: &mut [P],
    state: AnimationState,
    config: &AnimationConfig,
) -> StepOutcome {
    let AnimationState { direction, multiplier, scale } = state;

    translate(points, direction);

    let center = bounding_box(points).map(|b| b.center());
    if let Some(center) = center {
        scale_about(points, center, multiplier);
    }

    let scale = scale * multiplier;
    let next_multiplier = config.pulse.next_multiplier(scale, multiplier);
    let pulse = if next_multiplier != multiplier {
        config.pulse.phase_of(next_multiplier)
    } else {
        None
    };

    let (direction, reflection) = reflect_direction(points, direction, config.wall);

    StepOutcome {
        state: AnimationState {
            direction,
            multiplier: next_multiplier,
            scale,
        },
        center,
        reflection,
        pulse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::config::Preset;
    use crate::geometry::triangle;

    const EPS: f32 = 1e-5;

    fn still(config: &AnimationConfig) -> AnimationState {
        AnimationState { direction: Vec3::zero(), ..config.initial_state() }
    }

    // ── single frame ──────────────────────────────────────────────────────

    #[test]
    fn first_frame_of_pulse_preset() {
        let config = Preset::Pulse.config();
        let mut pts = triangle();
        let out = step(&mut pts, config.initial_state(), &config);

        // Translated by (0.005, 0.005), then shrunk by 0.888 about (0.005, 0.505).
        let center = Vec3::xy(0.005, 0.505);
        assert!(out.center.unwrap().approx_eq(center, EPS));
        assert!(pts[0].position.approx_eq(Vec3::xy(-0.439, 0.061), EPS));
        assert!(pts[1].position.approx_eq(Vec3::xy(0.449, 0.061), EPS));
        assert!(pts[2].position.approx_eq(Vec3::xy(0.005, 0.949), EPS));

        // 0.888 is already above the high threshold, so the gentle shrink
        // takes over from the second frame on.
        assert_eq!(out.state.scale, 0.888);
        assert_eq!(out.state.multiplier, config.pulse.shrink);
        assert_eq!(out.pulse, Some(PulsePhase::Shrinking));
        assert_eq!(out.state.direction, config.direction);
        assert!(!out.reflection.any());
    }

    #[test]
    fn colors_are_untouched() {
        let config = Preset::Pulse.config();
        let mut pts = triangle();
        step(&mut pts, config.initial_state(), &config);
        for (after, before) in pts.iter().zip(triangle().iter()) {
            assert_eq!(after.color, before.color);
        }
    }

    #[test]
    fn step_preserves_center_without_translation() {
        let config = Preset::Breathe.config();
        let mut pts = triangle();
        let out = step(&mut pts, still(&config), &config);
        let after = bounding_box(&pts).unwrap().center();
        assert!(after.approx_eq(out.center.unwrap(), EPS));
        assert!(after.approx_eq(Vec3::xy(0.0, 0.5), EPS));
    }

    #[test]
    fn empty_set_still_advances_scale() {
        let config = Preset::Pulse.config();
        let mut pts: Vec<Vec3> = Vec::new();
        let out = step(&mut pts, config.initial_state(), &config);
        assert!(out.center.is_none());
        assert_eq!(out.state.scale, 0.888);
        assert!(!out.reflection.any());
    }

    // ── wall bounce ───────────────────────────────────────────────────────

    #[test]
    fn reaching_wall_flips_direction_same_frame() {
        let config = Preset::Pulse.config();
        let state = AnimationState::new(Vec3::xy(0.25, 0.0), 0.888);
        let mut pts = vec![Vec3::xy(0.75, 0.0)];
        let out = step(&mut pts, state, &config);
        assert_eq!(pts[0], Vec3::xy(1.0, 0.0));
        assert_eq!(out.state.direction.x, -0.25);
        assert!(out.reflection.x);
        assert!(!out.reflection.y);
    }

    #[test]
    fn short_of_wall_keeps_direction() {
        let config = Preset::Pulse.config();
        let state = AnimationState::new(Vec3::xy(0.25, 0.0), 0.888);
        let mut pts = vec![Vec3::xy(0.5, 0.0)];
        let out = step(&mut pts, state, &config);
        assert_eq!(out.state.direction.x, 0.25);
        assert!(!out.reflection.any());
    }

    #[test]
    fn drift_stays_inside_walls() {
        let config = Preset::Drift.config();
        let mut pts = triangle();
        let mut state = config.initial_state();
        let mut bounces = 0;
        for _ in 0..2_000 {
            let out = step(&mut pts, state, &config);
            state = out.state;
            if out.reflection.any() {
                bounces += 1;
            }
            for p in &pts {
                // One frame of travel past the wall at most.
                assert!(p.position.x.abs() <= 1.0 + config.direction.x.abs() + EPS);
                assert!(p.position.y.abs() <= 1.0 + config.direction.y.abs() + EPS);
            }
        }
        assert!(bounces > 0);
        assert_eq!(state.scale, 1.0);
    }

    // ── pulse ─────────────────────────────────────────────────────────────

    #[test]
    fn shrink_then_grow_then_shrink() {
        let config = Preset::Pulse.config();
        let mut pts = triangle();
        let mut state = still(&config);

        let mut frames = 0;
        loop {
            let out = step(&mut pts, state, &config);
            state = out.state;
            frames += 1;
            if out.pulse == Some(PulsePhase::Growing) {
                break;
            }
            assert!(frames < 500, "never reached the low threshold");
        }
        assert!(state.scale <= config.pulse.low);
        assert!(state.multiplier > 1.0);

        loop {
            let out = step(&mut pts, state, &config);
            state = out.state;
            frames += 1;
            if out.pulse == Some(PulsePhase::Shrinking) {
                break;
            }
            assert!(frames < 1_000, "never reached the high threshold");
        }
        assert!(state.scale >= config.pulse.high);
        assert_eq!(state.multiplier, config.pulse.shrink);
    }

    #[test]
    fn pulse_reported_only_on_switch() {
        let config = Preset::Pulse.config();
        let mut pts = triangle();
        let mut state = AnimationState { scale: 0.19, multiplier: 0.988, ..still(&config) };

        let first = step(&mut pts, state, &config);
        assert_eq!(first.pulse, Some(PulsePhase::Growing));
        state = first.state;

        // Scale is still under the low threshold, multiplier already `grow`.
        let second = step(&mut pts, state, &config);
        assert!(second.state.scale <= config.pulse.low);
        assert!(second.pulse.is_none());
    }

    #[test]
    fn scale_oscillates_in_band() {
        let config = Preset::Breathe.config();
        let mut pts = triangle();
        let mut state = still(&config);
        let (mut lo, mut hi) = (f32::MAX, f32::MIN);
        for _ in 0..5_000 {
            state = step(&mut pts, state, &config).state;
            lo = lo.min(state.scale);
            hi = hi.max(state.scale);
        }
        // Overshoot is bounded by one frame's factor.
        assert!(lo >= config.pulse.low * config.pulse.shrink - EPS);
        assert!(hi <= config.pulse.high * config.pulse.grow + EPS);
        assert!(lo <= config.pulse.low);
        assert!(hi >= config.pulse.high);
    }
}

use anyhow::{Context, Result};

use super::frame::{FrameControl, FrameReport, RunSummary};
use crate::anim::BounceAnimator;
use crate::geometry::{bounding_box, Vertex};
use crate::time::FramePacer;
use crate::upload::{vertex_bytes, VertexSink};

/// Loop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Stop after this many frames. `None` runs until the callback exits or
    /// the sink fails.
    pub frames: Option<u64>,
    /// Frame rate to pace to. `None` runs unpaced.
    pub target_fps: Option<f32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: None,
            target_fps: Some(60.0),
        }
    }
}

impl RunConfig {
    pub fn frames(mut self, frames: u64) -> Self {
        self.frames = Some(frames);
        self
    }

    pub fn unpaced(mut self) -> Self {
        self.target_fps = None;
        self
    }

    pub fn target_fps(mut self, fps: f32) -> Self {
        self.target_fps = Some(fps);
        self
    }
}

/// Entry point for the loop.
pub struct Runtime;

impl Runtime {
    /// Runs without a per-frame callback.
    pub fn run<S>(
        animator: &mut BounceAnimator<Vertex>,
        sink: &mut S,
        config: &RunConfig,
    ) -> Result<RunSummary>
    where
        S: VertexSink + ?Sized,
    {
        Self::run_with(animator, sink, config, |_| FrameControl::Continue)
    }

    /// Runs, calling `on_frame` after every upload.
    pub fn run_with<S, F>(
        animator: &mut BounceAnimator<Vertex>,
        sink: &mut S,
        config: &RunConfig,
        mut on_frame: F,
    ) -> Result<RunSummary>
    where
        S: VertexSink + ?Sized,
        F: FnMut(&FrameReport) -> FrameControl,
    {
        let mut pacer = FramePacer::new(config.target_fps);
        let mut summary = RunSummary::new(animator.state());

        log::info!(
            "run started: {} vertices, frames={:?}, target_fps={:?}",
            animator.points().len(),
            config.frames,
            config.target_fps,
        );

        sink.upload(vertex_bytes(animator.points()))
            .context("initial vertex upload failed")?;

        while config.frames.is_none_or(|limit| summary.frames < limit) {
            let time = pacer.tick();

            sink.draw(animator.points().len())
                .with_context(|| format!("draw failed on frame {}", time.frame_index))?;

            let outcome = animator.advance();

            sink.upload(vertex_bytes(animator.points()))
                .with_context(|| format!("vertex upload failed on frame {}", time.frame_index))?;

            summary.record(&outcome);

            let report = FrameReport {
                time,
                outcome,
                bounds: bounding_box(animator.points()),
            };
            log::trace!(
                "frame {}: dt={:.4}s scale={:.4} center={:?}",
                time.frame_index,
                time.dt,
                outcome.state.scale,
                outcome.center,
            );

            if on_frame(&report) == FrameControl::Exit {
                log::debug!("run stopped by callback at frame {}", time.frame_index);
                break;
            }
        }

        log::info!(
            "run finished: {} frames, {} bounces, {} pulse switches",
            summary.frames,
            summary.bounces,
            summary.pulse_switches,
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{step, Preset};
    use crate::geometry::triangle;
    use crate::upload::RecordingSink;

    fn animator(preset: Preset) -> BounceAnimator<Vertex> {
        BounceAnimator::new(triangle().to_vec(), preset.config()).unwrap()
    }

    // ── frame accounting ──────────────────────────────────────────────────

    #[test]
    fn zero_frames_uploads_once() {
        let mut anim = animator(Preset::Pulse);
        let mut sink = RecordingSink::new();
        let summary = Runtime::run(&mut anim, &mut sink, &RunConfig::default().frames(0)).unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(sink.uploads(), 1);
        assert_eq!(sink.draws(), 0);
        assert_eq!(sink.vertices(), triangle().to_vec());
    }

    #[test]
    fn one_upload_and_draw_per_frame() {
        let mut anim = animator(Preset::Pulse);
        let mut sink = RecordingSink::new();
        let config = RunConfig::default().frames(120).unpaced();
        let summary = Runtime::run(&mut anim, &mut sink, &config).unwrap();
        assert_eq!(summary.frames, 120);
        assert_eq!(anim.frame(), 120);
        assert_eq!(sink.uploads(), 121);
        assert_eq!(sink.draws(), 120);
        assert_eq!(sink.drawn_vertices(), 360);
    }

    #[test]
    fn sink_holds_latest_points() {
        let mut anim = animator(Preset::Breathe);
        let mut sink = RecordingSink::new();
        Runtime::run(&mut anim, &mut sink, &RunConfig::default().frames(37).unpaced()).unwrap();
        assert_eq!(sink.vertices(), anim.points().to_vec());
    }

    #[test]
    fn summary_matches_pure_steps() {
        let config = Preset::Pulse.config();
        let mut pts = triangle();
        let mut state = config.initial_state();
        let (mut bounces, mut switches) = (0, 0);
        for _ in 0..500 {
            let out = step(&mut pts, state, &config);
            state = out.state;
            bounces += out.reflection.any() as u64;
            switches += out.pulse.is_some() as u64;
        }

        let mut anim = animator(Preset::Pulse);
        let mut sink = RecordingSink::new();
        let summary =
            Runtime::run(&mut anim, &mut sink, &RunConfig::default().frames(500).unpaced()).unwrap();
        assert_eq!(summary.final_state, state);
        assert_eq!(summary.bounces, bounces);
        assert_eq!(summary.pulse_switches, switches);
        assert!(summary.bounces > 0);
    }

    // ── callbacks ─────────────────────────────────────────────────────────

    #[test]
    fn callback_can_stop_unbounded_run() {
        let mut anim = animator(Preset::Drift);
        let mut sink = RecordingSink::new();
        let mut seen = Vec::new();
        let summary = Runtime::run_with(&mut anim, &mut sink, &RunConfig::default().unpaced(), |r| {
            seen.push(r.time.frame_index);
            if r.time.frame_index == 9 { FrameControl::Exit } else { FrameControl::Continue }
        })
        .unwrap();
        assert_eq!(summary.frames, 10);
        assert_eq!(seen, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn report_bounds_cover_uploaded_vertices() {
        let mut anim = animator(Preset::Pulse);
        let mut sink = RecordingSink::new();
        let mut last = None;
        Runtime::run_with(&mut anim, &mut sink, &RunConfig::default().frames(5).unpaced(), |r| {
            last = r.bounds;
            FrameControl::Continue
        })
        .unwrap();
        assert_eq!(last, bounding_box(&sink.vertices()));
    }

    // ── failures ──────────────────────────────────────────────────────────

    struct FailingSink {
        uploads_left: u32,
    }

    impl VertexSink for FailingSink {
        fn upload(&mut self, _bytes: &[u8]) -> Result<()> {
            anyhow::ensure!(self.uploads_left > 0, "buffer lost");
            self.uploads_left -= 1;
            Ok(())
        }

        fn draw(&mut self, _vertex_count: usize) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_is_propagated_with_frame() {
        let mut anim = animator(Preset::Pulse);
        let mut sink = FailingSink { uploads_left: 3 };
        let err = Runtime::run(&mut anim, &mut sink, &RunConfig::default().unpaced()).unwrap_err();
        assert_eq!(err.to_string(), "vertex upload failed on frame 2");
        assert_eq!(err.root_cause().to_string(), "buffer lost");
        assert_eq!(anim.frame(), 3);
    }

    #[test]
    fn initial_upload_failure() {
        let mut anim = animator(Preset::Pulse);
        let mut sink = FailingSink { uploads_left: 0 };
        let err = Runtime::run(&mut anim, &mut sink, &RunConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "initial vertex upload failed");
        assert_eq!(anim.frame(), 0);
    }
}

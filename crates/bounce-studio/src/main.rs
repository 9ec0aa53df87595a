use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;

use bounce_engine::anim::{BounceAnimator, Preset};
use bounce_engine::geometry::triangle;
use bounce_engine::logging::{init_logging, LoggingConfig};
use bounce_engine::runtime::{FrameControl, RunConfig, Runtime};
use bounce_engine::upload::RecordingSink;

/// Headless run of the bouncing, pulsing triangle.
#[derive(Debug, Parser)]
#[command(name = "bounce-studio", version, about)]
struct Args {
    /// Animation preset: pulse, breathe or drift.
    #[arg(long, default_value_t = Preset::Pulse)]
    preset: Preset,

    /// Number of frames to run, or `forever`.
    #[arg(long, default_value_t = FrameLimit(Some(600)))]
    frames: FrameLimit,

    /// Target frame rate. Zero or negative runs unpaced.
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    fps: f32,

    /// Log a progress line every N frames.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    report_every: u64,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            frames: self.frames.0,
            target_fps: (self.fps > 0.0).then_some(self.fps),
        }
    }
}

/// Frame count limit; `None` runs until interrupted.
#[derive(Debug, Copy, Clone, PartialEq)]
struct FrameLimit(Option<u64>);

impl FromStr for FrameLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forever" => Ok(FrameLimit(None)),
            n => n
                .parse()
                .map(|n| FrameLimit(Some(n)))
                .map_err(|e| format!("expected a frame count or `forever`: {e}")),
        }
    }
}

impl fmt::Display for FrameLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("forever"),
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = Args::parse();
    let run = args.run_config();
    log::info!("preset `{}`, {:?}", args.preset, run);

    let mut animator = BounceAnimator::new(triangle().to_vec(), args.preset.config())
        .with_context(|| format!("preset `{}` is misconfigured", args.preset))?;
    let mut sink = RecordingSink::new();

    let report_every = args.report_every;
    let summary = Runtime::run_with(&mut animator, &mut sink, &run, |report| {
        let frame = report.time.frame_index + 1;
        if frame % report_every == 0 {
            if let Some(b) = report.bounds {
                let c = b.center();
                log::info!(
                    "frame {frame}: center=({:+.3}, {:+.3}) size=({:.3}, {:.3}) scale={:.3}",
                    c.x,
                    c.y,
                    b.size().x,
                    b.size().y,
                    report.outcome.state.scale,
                );
            }
        }
        FrameControl::Continue
    })?;

    println!();
    println!("  frames          {}", summary.frames);
    println!("  bounces         {}", summary.bounces);
    println!("  pulse switches  {}", summary.pulse_switches);
    println!("  final scale     {:.4}", summary.final_state.scale);
    println!("  uploaded bytes  {}", sink.buffer().len());
    println!();

    Ok(())
}

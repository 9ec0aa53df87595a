//! Headless animation loop.
//!
//! Drives a [`BounceAnimator`](crate::anim::BounceAnimator) and hands every
//! frame to a [`VertexSink`](crate::upload::VertexSink), in the order a
//! windowed program would: draw the current buffer, advance, re-upload.

mod frame;
mod run;

pub use frame::{FrameControl, FrameReport, RunSummary};
pub use run::{RunConfig, Runtime};

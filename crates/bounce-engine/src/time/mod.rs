//! Frame timing for the animation loop.
//!
//! The animator itself is frame-based, not time-based: one `advance()` per
//! frame regardless of wall-clock time. [`FramePacer`] only decides when the
//! next frame is due and reports what actually happened.

mod pacer;

pub use pacer::{FramePacer, FrameTime};

//! Bounce engine crate.
//!
//! Vector math, point-set transforms and the per-frame bounce/pulse animator,
//! plus the headless loop that feeds animated vertices to a graphics sink.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec3`, `Bounds`, `ColorRgba` |
//! | [`geometry`] | `Positioned`, `Vertex`, translate / bounding box / scale about |
//! | [`anim`] | `AnimationConfig`, `AnimationState`, `step`, `BounceAnimator` |
//! | [`upload`] | `VertexSink`, `RecordingSink`, `vertex_bytes` |
//! | [`time`] | `FramePacer` |
//! | [`runtime`] | `Runtime`, `RunConfig` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use bounce_engine::anim::{BounceAnimator, Preset};
//! use bounce_engine::geometry::triangle;
//! use bounce_engine::runtime::{RunConfig, Runtime};
//! use bounce_engine::upload::RecordingSink;
//!
//! let mut animator = BounceAnimator::new(triangle().to_vec(), Preset::Pulse.config()).unwrap();
//! let mut sink = RecordingSink::new();
//! let summary = Runtime::run(&mut animator, &mut sink, &RunConfig::default().frames(60).unpaced()).unwrap();
//! assert_eq!(summary.frames, 60);
//! ```

pub mod anim;
pub mod coords;
pub mod geometry;
pub mod logging;
pub mod runtime;
pub mod time;
pub mod upload;

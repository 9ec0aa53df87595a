//! Hand-off to the graphics collaborator.
//!
//! The engine never talks to a GPU API directly. Each frame it produces vertex
//! bytes and a draw count; a [`VertexSink`] decides what to do with them.

mod recording;
mod sink;

pub use recording::RecordingSink;
pub use sink::{vertex_bytes, VertexSink};

use anyhow::Result;

use crate::geometry::Vertex;

/// Receives vertex data and draw requests.
///
/// Implementations wrap whatever graphics API owns the buffer. Errors are
/// reported as-is; the caller decides whether the loop can continue.
pub trait VertexSink {
    /// Replaces the buffer contents with `bytes`.
    fn upload(&mut self, bytes: &[u8]) -> Result<()>;

    /// Draws the first `vertex_count` vertices of the buffer.
    fn draw(&mut self, vertex_count: usize) -> Result<()>;
}

/// Views `vertices` as raw bytes in upload layout. No copy.
#[inline]
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

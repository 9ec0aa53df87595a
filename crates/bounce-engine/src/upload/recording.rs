use anyhow::{ensure, Result};

use super::sink::VertexSink;
use crate::geometry::Vertex;

/// Sink that keeps the most recent upload and counts calls.
///
/// Stands in for a GPU buffer in headless runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    buffer: Vec<u8>,
    uploads: u64,
    draws: u64,
    drawn_vertices: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the last upload.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Last upload decoded back into vertices.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.buffer
            .chunks_exact(Vertex::STRIDE)
            .map(bytemuck::pod_read_unaligned)
            .collect()
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Sum of vertex counts over every draw call.
    pub fn drawn_vertices(&self) -> u64 {
        self.drawn_vertices
    }
}

impl VertexSink for RecordingSink {
    fn upload(&mut self, bytes: &[u8]) -> Result<()> {
        self.buffer.clear();
        self.buffer.extend_from_slice(bytes);
        self.uploads += 1;
        Ok(())
    }

    fn draw(&mut self, vertex_count: usize) -> Result<()> {
        let available = self.buffer.len() / Vertex::STRIDE;
        ensure!(
            vertex_count <= available,
            "draw of {vertex_count} vertices exceeds buffer of {available}"
        );
        self.draws += 1;
        self.drawn_vertices += vertex_count as u64;
        Ok(())
    }
}

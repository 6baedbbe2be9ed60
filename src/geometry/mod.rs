//! CPU-side geometry: vertex format, indexed buffers and the primitive
//! generators used by the shape factory, ground plane and helpers.

mod lines;
mod polyhedra;
mod primitives;

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

pub use lines::{line_segments, LineSegment};
pub use polyhedra::{dodecahedron, octahedron, tetrahedron};
pub use primitives::{
    box_geometry, capsule, cone, cylinder, plane, sphere, torus, torus_knot,
};

/// Vertex layout shared by every pipeline (32 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 24,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };

    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// How `Geometry::indices` is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

/// Unique identity of a generated geometry, used to key GPU buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(u64);

static NEXT_GEOMETRY_ID: AtomicU64 = AtomicU64::new(1);

impl GeometryId {
    fn next() -> Self {
        Self(NEXT_GEOMETRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Indexed vertex data plus a label for logs and the overlay
#[derive(Debug)]
pub struct Geometry {
    id: GeometryId,
    label: &'static str,
    topology: Topology,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Geometry {
    pub fn new(label: &'static str, topology: Topology, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self {
            id: GeometryId::next(),
            label,
            topology,
            vertices,
            indices,
        }
    }

    pub fn triangles(label: &'static str, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self::new(label, Topology::Triangles, vertices, indices)
    }

    pub fn id(&self) -> GeometryId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => 0,
        }
    }

    /// Line-list indices covering every unique triangle edge
    ///
    /// For line geometry the indices are returned as-is.
    pub fn edge_indices(&self) -> Vec<u32> {
        if self.topology == Topology::Lines {
            return self.indices.clone();
        }

        let mut seen = HashSet::new();
        let mut edges = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push(a);
                    edges.push(b);
                }
            }
        }
        edges
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), v| (min.min(v.position()), max.max(v.position())),
        )
    }
}

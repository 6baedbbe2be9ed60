use glam::Vec3;

use super::{Geometry, Topology, Vertex};

/// A world-space line segment
pub type LineSegment = [Vec3; 2];

/// Line-list geometry from a set of segments
pub fn line_segments(label: &'static str, segments: &[LineSegment]) -> Geometry {
    let vertices: Vec<Vertex> = segments
        .iter()
        .flat_map(|[a, b]| [Vertex::new(*a, Vec3::ZERO, [0.0, 0.0]), Vertex::new(*b, Vec3::ZERO, [1.0, 0.0])])
        .collect();
    let indices = (0..vertices.len() as u32).collect();
    Geometry::new(label, Topology::Lines, vertices, indices)
}

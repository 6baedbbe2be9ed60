use glam::Vec3;

use super::{Geometry, Vertex};

/// Flat-shaded polyhedron projected onto a sphere of `radius`
///
/// Triangles are emitted unindexed so each face carries its own normal.
/// Faces are re-wound when needed so normals always point away from the
/// center.
fn polyhedron(label: &'static str, corners: &[[f32; 3]], faces: &[[u32; 3]], radius: f32) -> Geometry {
    let points: Vec<Vec3> = corners
        .iter()
        .map(|c| Vec3::from_array(*c).normalize() * radius)
        .collect();

    let mut vertices = Vec::with_capacity(faces.len() * 3);
    for face in faces {
        let [mut a, b, mut c] = face.map(|i| points[i as usize]);
        let mut normal = (b - a).cross(c - a).normalize();
        if normal.dot(a + b + c) < 0.0 {
            std::mem::swap(&mut a, &mut c);
            normal = -normal;
        }
        vertices.push(Vertex::new(a, normal, [0.0, 0.0]));
        vertices.push(Vertex::new(b, normal, [0.5, 1.0]));
        vertices.push(Vertex::new(c, normal, [1.0, 0.0]));
    }

    let indices = (0..vertices.len() as u32).collect();
    Geometry::triangles(label, vertices, indices)
}

pub fn tetrahedron(radius: f32) -> Geometry {
    const CORNERS: [[f32; 3]; 4] = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    const FACES: [[u32; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    polyhedron("tetrahedron", &CORNERS, &FACES, radius)
}

pub fn octahedron(radius: f32) -> Geometry {
    const CORNERS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    const FACES: [[u32; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron("octahedron", &CORNERS, &FACES, radius)
}

pub fn dodecahedron(radius: f32) -> Geometry {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;

    let corners = [
        // (±1, ±1, ±1)
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        // (0, ±1/φ, ±φ)
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        // (±1/φ, ±φ, 0)
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        // (±φ, 0, ±1/φ)
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];

    // Twelve pentagons, three triangles each
    const FACES: [[u32; 3]; 36] = [
        [3, 11, 7], [3, 7, 15], [3, 15, 13],
        [7, 19, 17], [7, 17, 6], [7, 6, 15],
        [17, 4, 8], [17, 8, 10], [17, 10, 6],
        [8, 0, 16], [8, 16, 2], [8, 2, 10],
        [0, 12, 1], [0, 1, 18], [0, 18, 16],
        [6, 10, 2], [6, 2, 13], [6, 13, 15],
        [2, 16, 18], [2, 18, 3], [2, 3, 13],
        [18, 1, 9], [18, 9, 11], [18, 11, 3],
        [4, 14, 12], [4, 12, 0], [4, 0, 8],
        [11, 9, 5], [11, 5, 19], [11, 19, 7],
        [19, 5, 14], [19, 14, 4], [19, 4, 17],
        [1, 12, 14], [1, 14, 5], [1, 5, 9],
    ];

    polyhedron("dodecahedron", &corners, &FACES, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(geometry: &Geometry) {
        for tri in geometry.indices().chunks_exact(3) {
            let [a, b, c] = [0, 1, 2].map(|k| geometry.vertices()[tri[k] as usize]);
            let centroid = (a.position() + b.position() + c.position()) / 3.0;
            assert!(a.normal().dot(centroid) > 0.0, "{} has an inward face", geometry.label());
            let winding = (b.position() - a.position()).cross(c.position() - a.position());
            assert!(winding.dot(a.normal()) > 0.0);
        }
    }

    #[test]
    fn test_tetrahedron() {
        let g = tetrahedron(0.75);
        assert_eq!(g.triangle_count(), 4);
        assert_outward(&g);
    }

    #[test]
    fn test_octahedron() {
        let g = octahedron(0.75);
        assert_eq!(g.triangle_count(), 8);
        assert_outward(&g);
    }

    #[test]
    fn test_dodecahedron() {
        let g = dodecahedron(0.75);
        assert_eq!(g.triangle_count(), 36);
        assert_outward(&g);
    }

    #[test]
    fn test_vertices_on_sphere() {
        for g in [tetrahedron(0.75), octahedron(0.75), dodecahedron(0.75)] {
            for v in g.vertices() {
                assert!((v.position().length() - 0.75).abs() < 1e-5);
            }
        }
    }
}

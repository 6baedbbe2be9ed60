use glam::Vec3;
use scene_playground::geometry::{self, Geometry, Topology};
use scene_playground::shape::{ShapeFactory, ShapeKind};

fn all_shapes() -> Vec<(ShapeKind, std::sync::Arc<Geometry>)> {
    let factory = ShapeFactory::default();
    ShapeKind::ALL.iter().map(|kind| (*kind, factory.build(*kind))).collect()
}

fn face_normal(geometry: &Geometry, tri: &[u32]) -> Vec3 {
    let v = geometry.vertices();
    let a = v[tri[0] as usize].position();
    let b = v[tri[1] as usize].position();
    let c = v[tri[2] as usize].position();
    (b - a).cross(c - a)
}

#[cfg(test)]
mod shape_geometry_tests {
    use super::*;

    #[test]
    fn test_indices_in_range() {
        for (kind, geometry) in all_shapes() {
            let count = geometry.vertices().len() as u32;
            assert!(
                geometry.indices().iter().all(|&i| i < count),
                "{kind}: index out of range"
            );
            assert_eq!(geometry.indices().len() % 3, 0, "{kind}: partial triangle");
            assert_eq!(geometry.topology(), Topology::Triangles);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for (kind, geometry) in all_shapes() {
            for vertex in geometry.vertices() {
                let length = vertex.normal().length();
                assert!((length - 1.0).abs() < 1e-3, "{kind}: normal length {length}");
            }
        }
    }

    #[test]
    fn test_shapes_fit_around_origin() {
        for (kind, geometry) in all_shapes() {
            let (min, max) = geometry.bounds();
            assert!(min.cmplt(Vec3::ZERO).all() && max.cmpgt(Vec3::ZERO).all(), "{kind}: misses origin");
            assert!(max.max_element() <= 2.01 && min.min_element() >= -2.01, "{kind}: too large");
        }
    }

    #[test]
    fn test_distinct_geometry_per_build() {
        let factory = ShapeFactory::default();
        let first = factory.build(ShapeKind::Sphere);
        let second = factory.build(ShapeKind::Sphere);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.vertices().len(), second.vertices().len());
    }
}

#[cfg(test)]
mod primitive_tests {
    use super::*;

    #[test]
    fn test_box_counts_and_bounds() {
        let cube = geometry::box_geometry(1.0, 1.0, 1.0);
        assert_eq!(cube.vertices().len(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.bounds(), (Vec3::splat(-0.5), Vec3::splat(0.5)));
    }

    #[test]
    fn test_box_winding_matches_normals() {
        let cube = geometry::box_geometry(2.0, 1.0, 3.0);
        for tri in cube.indices().chunks_exact(3) {
            let normal = cube.vertices()[tri[0] as usize].normal();
            assert!(face_normal(&cube, tri).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_sphere_skips_pole_triangles() {
        let sphere = geometry::sphere(0.75, 32, 32);
        assert_eq!(sphere.vertices().len(), 33 * 33);
        assert_eq!(sphere.triangle_count(), 32 * 62);
        for vertex in sphere.vertices() {
            assert!((vertex.position().length() - 0.75).abs() < 1e-4);
        }
    }

    #[test]
    fn test_polyhedron_face_counts() {
        assert_eq!(geometry::tetrahedron(0.75).triangle_count(), 4);
        assert_eq!(geometry::octahedron(0.75).triangle_count(), 8);
        assert_eq!(geometry::dodecahedron(0.75).triangle_count(), 36);
    }

    #[test]
    fn test_polyhedra_face_outwards() {
        for solid in [
            geometry::tetrahedron(0.75),
            geometry::octahedron(0.75),
            geometry::dodecahedron(0.75),
        ] {
            for tri in solid.indices().chunks_exact(3) {
                let v = solid.vertices();
                let centroid = tri.iter().map(|&i| v[i as usize].position()).sum::<Vec3>();
                assert!(face_normal(&solid, tri).dot(centroid) > 0.0, "{}", solid.label());
            }
            for vertex in solid.vertices() {
                assert!((vertex.position().length() - 0.75).abs() < 1e-4);
            }
        }
    }
}

#[cfg(test)]
mod edge_tests {
    use super::*;

    #[test]
    fn test_box_edges_include_diagonals() {
        // Faces are not welded: four sides plus one diagonal per face
        let edges = geometry::box_geometry(1.0, 1.0, 1.0).edge_indices();
        assert_eq!(edges.len(), 6 * 5 * 2);
    }

    #[test]
    fn test_unwelded_tetrahedron_edges() {
        let edges = geometry::tetrahedron(1.0).edge_indices();
        assert_eq!(edges.len(), 4 * 3 * 2);
    }

    #[test]
    fn test_edges_are_unique() {
        for (kind, geometry) in all_shapes() {
            let edges = geometry.edge_indices();
            let mut keys: Vec<_> = edges.chunks_exact(2).map(|e| (e[0].min(e[1]), e[0].max(e[1]))).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "{kind}: duplicate edge");
        }
    }
}

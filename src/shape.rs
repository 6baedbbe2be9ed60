//! Shape selection: digit keys and dropdown values map to a fixed set of
//! primitives built with hardcoded dimensions.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::geometry::{self, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Box,
    Capsule,
    Cone,
    Cylinder,
    Sphere,
    Torus,
    TorusKnot,
    Octahedron,
    Tetrahedron,
    Dodecahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Box,
        ShapeKind::Capsule,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
        ShapeKind::Octahedron,
        ShapeKind::Tetrahedron,
        ShapeKind::Dodecahedron,
    ];

    /// Map a key or dropdown value ("1".."9", "0") to a shape
    ///
    /// Anything else yields `None`; callers treat that as a no-op.
    pub fn from_key(key: &str) -> Option<Self> {
        let kind = match key {
            "1" => ShapeKind::Box,
            "2" => ShapeKind::Capsule,
            "3" => ShapeKind::Cone,
            "4" => ShapeKind::Cylinder,
            "5" => ShapeKind::Sphere,
            "6" => ShapeKind::Torus,
            "7" => ShapeKind::TorusKnot,
            "8" => ShapeKind::Octahedron,
            "9" => ShapeKind::Tetrahedron,
            "0" => ShapeKind::Dodecahedron,
            _ => return None,
        };
        Some(kind)
    }

    pub fn key(self) -> &'static str {
        match self {
            ShapeKind::Box => "1",
            ShapeKind::Capsule => "2",
            ShapeKind::Cone => "3",
            ShapeKind::Cylinder => "4",
            ShapeKind::Sphere => "5",
            ShapeKind::Torus => "6",
            ShapeKind::TorusKnot => "7",
            ShapeKind::Octahedron => "8",
            ShapeKind::Tetrahedron => "9",
            ShapeKind::Dodecahedron => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Capsule => "Capsule",
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Torus => "Torus",
            ShapeKind::TorusKnot => "Torus Knot",
            ShapeKind::Octahedron => "Octahedron",
            ShapeKind::Tetrahedron => "Tetrahedron",
            ShapeKind::Dodecahedron => "Dodecahedron",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds primitive geometry with fixed per-shape dimensions
#[derive(Debug, Clone, Copy)]
pub struct ShapeFactory {
    capsule_length: f32,
}

impl ShapeFactory {
    pub fn new(capsule_length: f32) -> Self {
        Self { capsule_length }
    }

    pub fn build(&self, kind: ShapeKind) -> Arc<Geometry> {
        let geometry = match kind {
            ShapeKind::Box => geometry::box_geometry(1.0, 1.0, 1.0),
            ShapeKind::Capsule => geometry::capsule(0.5, self.capsule_length, 4, 8),
            ShapeKind::Cone => geometry::cone(0.75, 1.5, 32),
            ShapeKind::Cylinder => geometry::cylinder(0.75, 0.75, 1.5, 32),
            ShapeKind::Sphere => geometry::sphere(0.75, 32, 32),
            ShapeKind::Torus => geometry::torus(0.75, 0.25, 16, 100),
            ShapeKind::TorusKnot => geometry::torus_knot(0.75, 0.25, 100, 16, 2, 3),
            ShapeKind::Octahedron => geometry::octahedron(0.75),
            ShapeKind::Tetrahedron => geometry::tetrahedron(0.75),
            ShapeKind::Dodecahedron => geometry::dodecahedron(0.75),
        };
        Arc::new(geometry)
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_keys() {
        for key in ["", "a", "10", " ", "Enter", "ArrowUp", "-1"] {
            assert_eq!(ShapeKind::from_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn test_zero_is_dodecahedron() {
        assert_eq!(ShapeKind::from_key("0"), Some(ShapeKind::Dodecahedron));
    }

    #[test]
    fn test_build_labels() {
        let factory = ShapeFactory::default();
        assert_eq!(factory.build(ShapeKind::TorusKnot).label(), "torus-knot");
        assert_eq!(factory.build(ShapeKind::Box).label(), "box");
    }

    #[test]
    fn test_capsule_length_follows_factory() {
        let long = ShapeFactory::new(2.0).build(ShapeKind::Capsule);
        let short = ShapeFactory::new(1.0).build(ShapeKind::Capsule);
        assert!((long.bounds().1.y - 1.5).abs() < 1e-5);
        assert!((short.bounds().1.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_each_build_is_fresh() {
        let factory = ShapeFactory::default();
        let a = factory.build(ShapeKind::Sphere);
        let b = factory.build(ShapeKind::Sphere);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_ne!(a.id(), b.id());
    }
}

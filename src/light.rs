//! Light selection. Each kind carries fixed parameters and, except for
//! ambient, a debug helper drawn as colored lines.

use std::f32::consts::PI;
use std::fmt;

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::helper::Helper;
use crate::math::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightKind {
    /// Fallback for unrecognized selector values
    #[default]
    Ambient,
    Directional,
    Hemisphere,
    Point,
    Spot,
}

impl LightKind {
    pub const ALL: [LightKind; 5] = [
        LightKind::Ambient,
        LightKind::Directional,
        LightKind::Hemisphere,
        LightKind::Point,
        LightKind::Spot,
    ];

    /// Unknown values select the default ambient light
    pub fn from_selector(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            LightKind::Ambient => "ambient",
            LightKind::Directional => "directional",
            LightKind::Hemisphere => "hemisphere",
            LightKind::Point => "point",
            LightKind::Spot => "spot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightKind::Ambient => "Ambient",
            LightKind::Directional => "Directional",
            LightKind::Hemisphere => "Hemisphere",
            LightKind::Point => "Point",
            LightKind::Spot => "Spot",
        }
    }

    /// Discriminant shared with `scene.wgsl` (0 means no light)
    pub fn code(self) -> u32 {
        match self {
            LightKind::Ambient => 1,
            LightKind::Directional => 2,
            LightKind::Hemisphere => 3,
            LightKind::Point => 4,
            LightKind::Spot => 5,
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind light parameters
#[derive(Debug, Clone, PartialEq)]
pub enum LightSource {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
        target: Vec3,
    },
    Hemisphere {
        sky: Color,
        ground: Color,
        intensity: f32,
        position: Vec3,
    },
    Point {
        color: Color,
        intensity: f32,
        distance: f32,
        decay: f32,
        position: Vec3,
    },
    Spot {
        color: Color,
        intensity: f32,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
        position: Vec3,
        target: Vec3,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub source: LightSource,
    pub cast_shadow: bool,
}

impl Light {
    /// Build the light for `kind` with its fixed parameters
    pub fn build(kind: LightKind) -> Self {
        let white = Color::WHITE;
        let source = match kind {
            LightKind::Ambient => LightSource::Ambient {
                color: white,
                intensity: 0.7,
            },
            LightKind::Directional => LightSource::Directional {
                color: white,
                intensity: 1.0,
                position: Vec3::new(-5.0, 10.0, -7.5),
                target: Vec3::ZERO,
            },
            LightKind::Hemisphere => LightSource::Hemisphere {
                sky: white,
                ground: Color::from_hex(0x0000ff),
                intensity: 1.0,
                position: Vec3::Y,
            },
            LightKind::Point => LightSource::Point {
                color: white,
                intensity: 50.0,
                distance: 100.0,
                decay: 2.0,
                position: Vec3::new(5.0, 5.0, 5.0),
            },
            LightKind::Spot => LightSource::Spot {
                color: white,
                intensity: 20.0,
                distance: 50.0,
                angle: PI / 6.0,
                penumbra: 0.5,
                decay: 1.0,
                position: Vec3::new(5.0, 10.0, 5.0),
                target: Vec3::ZERO,
            },
        };
        Self {
            source,
            cast_shadow: false,
        }
    }

    pub fn kind(&self) -> LightKind {
        match self.source {
            LightSource::Ambient { .. } => LightKind::Ambient,
            LightSource::Directional { .. } => LightKind::Directional,
            LightSource::Hemisphere { .. } => LightKind::Hemisphere,
            LightSource::Point { .. } => LightKind::Point,
            LightSource::Spot { .. } => LightKind::Spot,
        }
    }

    /// The debug helper drawn for this light, if the kind has one
    pub fn helper(&self) -> Option<Helper> {
        match &self.source {
            LightSource::Ambient { .. } => None,
            LightSource::Directional { color, position, target, .. } => {
                Some(Helper::directional_light(*position, *target, 5.0, *color))
            }
            LightSource::Hemisphere { sky, ground, position, .. } => {
                Some(Helper::hemisphere_light(*position, 5.0, *sky, *ground))
            }
            LightSource::Point { color, position, .. } => Some(Helper::point_light(*position, 0.5, *color)),
            LightSource::Spot { color, position, target, distance, angle, .. } => {
                Some(Helper::spot_light(*position, *target, *distance, *angle, *color))
            }
        }
    }

    pub fn position(&self) -> Option<Vec3> {
        match self.source {
            LightSource::Ambient { .. } => None,
            LightSource::Directional { position, .. }
            | LightSource::Hemisphere { position, .. }
            | LightSource::Point { position, .. }
            | LightSource::Spot { position, .. } => Some(position),
        }
    }

    /// Whether this kind can render into the shadow map
    pub fn supports_shadows(&self) -> bool {
        matches!(
            self.source,
            LightSource::Directional { .. } | LightSource::Point { .. } | LightSource::Spot { .. }
        )
    }

    /// View-projection used by the shadow pass, looking from the light at its
    /// target (the origin for point lights)
    pub fn shadow_view_proj(&self) -> Option<Mat4> {
        let proj_and_view = match self.source {
            LightSource::Directional { position, target, .. } => {
                let proj = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.5, 50.0);
                (proj, look_from(position, target))
            }
            LightSource::Spot { position, target, distance, angle, .. } => {
                let proj = Mat4::perspective_rh(angle * 2.0, 1.0, 0.5, distance);
                (proj, look_from(position, target))
            }
            LightSource::Point { position, distance, .. } => {
                let proj = Mat4::perspective_rh(PI / 2.0, 1.0, 0.5, distance);
                (proj, look_from(position, Vec3::ZERO))
            }
            LightSource::Ambient { .. } | LightSource::Hemisphere { .. } => return None,
        };
        Some(proj_and_view.0 * proj_and_view.1)
    }
}

fn look_from(eye: Vec3, target: Vec3) -> Mat4 {
    let forward = (target - eye).normalize_or_zero();
    let up = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    Mat4::look_at_rh(eye, target, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_names() {
        for kind in LightKind::ALL {
            assert_eq!(LightKind::from_selector(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_selector_falls_back_to_ambient() {
        assert_eq!(LightKind::from_selector("laser"), LightKind::Ambient);
        assert_eq!(LightKind::from_selector(""), LightKind::Ambient);
        assert_eq!(LightKind::default(), LightKind::Ambient);
    }

    #[test]
    fn test_build_kind_round_trip() {
        for kind in LightKind::ALL {
            assert_eq!(Light::build(kind).kind(), kind);
        }
    }

    #[test]
    fn test_ambient_has_no_helper() {
        assert!(Light::build(LightKind::Ambient).helper().is_none());
        for kind in &LightKind::ALL[1..] {
            assert!(Light::build(*kind).helper().is_some(), "{kind}");
        }
    }

    #[test]
    fn test_fallback_intensity() {
        match Light::build(LightKind::Ambient).source {
            LightSource::Ambient { intensity, .. } => assert_eq!(intensity, 0.7),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_new_lights_do_not_cast_shadows() {
        for kind in LightKind::ALL {
            assert!(!Light::build(kind).cast_shadow);
        }
    }

    #[test]
    fn test_shadow_support() {
        assert!(!Light::build(LightKind::Ambient).supports_shadows());
        assert!(!Light::build(LightKind::Hemisphere).supports_shadows());
        assert!(Light::build(LightKind::Spot).supports_shadows());
        assert!(Light::build(LightKind::Spot).shadow_view_proj().is_some());
        assert!(Light::build(LightKind::Hemisphere).shadow_view_proj().is_none());
    }

    #[test]
    fn test_shadow_projection_contains_origin() {
        for kind in [LightKind::Directional, LightKind::Point, LightKind::Spot] {
            let vp = Light::build(kind).shadow_view_proj().unwrap();
            let clip = vp.project_point3(Vec3::ZERO);
            assert!(clip.x.abs() < 1.0 && clip.y.abs() < 1.0, "{kind}");
            assert!((0.0..=1.0).contains(&clip.z), "{kind}");
        }
    }
}

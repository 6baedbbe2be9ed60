//! Non-rendered visual aids: axes markers and light indicators, built once
//! in world space as colored line batches.

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;

use crate::geometry::{line_segments, Geometry, LineSegment};
use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelperKind {
    Axes,
    DirectionalLight,
    HemisphereLight,
    PointLight,
    SpotLight,
}

/// One color, one line-list
#[derive(Debug, Clone)]
pub struct LineBatch {
    pub color: Color,
    pub geometry: Arc<Geometry>,
}

#[derive(Debug, Clone)]
pub struct Helper {
    pub kind: HelperKind,
    pub batches: Vec<LineBatch>,
}

impl Helper {
    fn new(kind: HelperKind, batches: Vec<(Color, Vec<LineSegment>)>) -> Self {
        let batches = batches
            .into_iter()
            .filter(|(_, segments)| !segments.is_empty())
            .map(|(color, segments)| LineBatch {
                color,
                geometry: Arc::new(line_segments("helper", &segments)),
            })
            .collect();
        Self { kind, batches }
    }

    /// Red, green and blue lines along +X, +Y and +Z
    pub fn axes(size: f32) -> Self {
        Self::new(
            HelperKind::Axes,
            vec![
                (Color::linear(1.0, 0.0, 0.0), vec![[Vec3::ZERO, Vec3::X * size]]),
                (Color::linear(0.0, 1.0, 0.0), vec![[Vec3::ZERO, Vec3::Y * size]]),
                (Color::linear(0.0, 0.0, 1.0), vec![[Vec3::ZERO, Vec3::Z * size]]),
            ],
        )
    }

    /// A square of `size` facing the target plus the line towards it
    pub fn directional_light(position: Vec3, target: Vec3, size: f32, color: Color) -> Self {
        let (right, up) = basis(target - position);
        let h = size * 0.5;
        let corners = [
            position - right * h - up * h,
            position + right * h - up * h,
            position + right * h + up * h,
            position - right * h + up * h,
        ];
        let mut segments: Vec<LineSegment> = (0..4).map(|i| [corners[i], corners[(i + 1) % 4]]).collect();
        segments.push([position, target]);
        Self::new(HelperKind::DirectionalLight, vec![(color, segments)])
    }

    /// An octahedron of `size` with the upper half in the sky color and the
    /// lower half in the ground color
    pub fn hemisphere_light(position: Vec3, size: f32, sky: Color, ground: Color) -> Self {
        let h = size * 0.5;
        let ring = [Vec3::X * h, Vec3::Z * h, Vec3::NEG_X * h, Vec3::NEG_Z * h].map(|p| position + p);
        let top = position + Vec3::Y * h;
        let bottom = position - Vec3::Y * h;

        let mut upper: Vec<LineSegment> = ring.iter().map(|p| [top, *p]).collect();
        let mut lower: Vec<LineSegment> = ring.iter().map(|p| [bottom, *p]).collect();
        for i in 0..4 {
            let edge = [ring[i], ring[(i + 1) % 4]];
            if i % 2 == 0 {
                upper.push(edge);
            } else {
                lower.push(edge);
            }
        }
        Self::new(HelperKind::HemisphereLight, vec![(sky, upper), (ground, lower)])
    }

    /// Three great circles of `radius` around the light
    pub fn point_light(position: Vec3, radius: f32, color: Color) -> Self {
        let mut segments = Vec::new();
        for (a, b) in [(Vec3::X, Vec3::Y), (Vec3::Y, Vec3::Z), (Vec3::Z, Vec3::X)] {
            segments.extend(circle(position, a * radius, b * radius, 16));
        }
        Self::new(HelperKind::PointLight, vec![(color, segments)])
    }

    /// Cone of `angle` from the light towards its target, `distance` long
    pub fn spot_light(position: Vec3, target: Vec3, distance: f32, angle: f32, color: Color) -> Self {
        let direction = (target - position).normalize_or_zero();
        let (right, up) = basis(direction);
        let center = position + direction * distance;
        let radius = distance * angle.tan();

        let mut segments: Vec<LineSegment> = (0..4)
            .map(|i| {
                let theta = i as f32 / 4.0 * TAU;
                [position, center + (right * theta.cos() + up * theta.sin()) * radius]
            })
            .collect();
        segments.extend(circle(center, right * radius, up * radius, 32));
        Self::new(HelperKind::SpotLight, vec![(color, segments)])
    }

    pub fn segment_count(&self) -> usize {
        self.batches.iter().map(|b| b.geometry.vertices().len() / 2).sum()
    }
}

/// Two unit vectors perpendicular to `direction` and to each other
fn basis(direction: Vec3) -> (Vec3, Vec3) {
    let forward = direction.normalize_or_zero();
    let reference = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = forward.cross(reference).normalize_or_zero();
    let up = right.cross(forward).normalize_or_zero();
    (right, up)
}

fn circle(center: Vec3, a: Vec3, b: Vec3, steps: u32) -> Vec<LineSegment> {
    let point = |i: u32| {
        let theta = i as f32 / steps as f32 * TAU;
        center + a * theta.cos() + b * theta.sin()
    };
    (0..steps).map(|i| [point(i), point(i + 1)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Topology;

    #[test]
    fn test_axes_three_colored_lines() {
        let axes = Helper::axes(5.0);
        assert_eq!(axes.kind, HelperKind::Axes);
        assert_eq!(axes.batches.len(), 3);
        assert_eq!(axes.segment_count(), 3);
        assert!(axes.batches.iter().all(|b| b.geometry.topology() == Topology::Lines));
        let (_, max) = axes.batches[0].geometry.bounds();
        assert_eq!(max, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_directional_helper_reaches_target() {
        let helper = Helper::directional_light(Vec3::new(-5.0, 10.0, -7.5), Vec3::ZERO, 5.0, Color::WHITE);
        assert_eq!(helper.segment_count(), 5);
        let touches_origin = helper.batches[0]
            .geometry
            .vertices()
            .iter()
            .any(|v| v.position() == Vec3::ZERO);
        assert!(touches_origin);
    }

    #[test]
    fn test_hemisphere_helper_two_colors() {
        let helper = Helper::hemisphere_light(Vec3::Y, 5.0, Color::WHITE, Color::from_hex(0x0000ff));
        assert_eq!(helper.batches.len(), 2);
        assert_eq!(helper.segment_count(), 12);
    }

    #[test]
    fn test_point_helper_radius() {
        let center = Vec3::new(5.0, 5.0, 5.0);
        let helper = Helper::point_light(center, 0.5, Color::WHITE);
        for v in helper.batches[0].geometry.vertices() {
            assert!(((v.position() - center).length() - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_spot_helper_cone() {
        let helper = Helper::spot_light(Vec3::new(5.0, 10.0, 5.0), Vec3::ZERO, 50.0, std::f32::consts::PI / 6.0, Color::WHITE);
        assert_eq!(helper.segment_count(), 4 + 32);
    }

    #[test]
    fn test_basis_vertical_direction() {
        let (right, up) = basis(Vec3::NEG_Y);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
    }
}

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::{Geometry, Vertex};

/// Axis-aligned box centered at the origin
pub fn box_geometry(width: f32, height: f32, depth: f32) -> Geometry {
    let half = Vec3::new(width, height, depth) * 0.5;

    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let center = normal * half;
        let du = u * half;
        let dv = v * half;
        let base = vertices.len() as u32;

        vertices.push(Vertex::new(center - du - dv, normal, [0.0, 1.0]));
        vertices.push(Vertex::new(center + du - dv, normal, [1.0, 1.0]));
        vertices.push(Vertex::new(center - du + dv, normal, [0.0, 0.0]));
        vertices.push(Vertex::new(center + du + dv, normal, [1.0, 0.0]));

        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    Geometry::triangles("box", vertices, indices)
}

/// Flat rectangle in the XY plane facing +Z
pub fn plane(width: f32, height: f32) -> Geometry {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let vertices = vec![
        Vertex::new(Vec3::new(-hw, -hh, 0.0), Vec3::Z, [0.0, 1.0]),
        Vertex::new(Vec3::new(hw, -hh, 0.0), Vec3::Z, [1.0, 1.0]),
        Vertex::new(Vec3::new(-hw, hh, 0.0), Vec3::Z, [0.0, 0.0]),
        Vertex::new(Vec3::new(hw, hh, 0.0), Vec3::Z, [1.0, 0.0]),
    ];
    Geometry::triangles("plane", vertices, vec![0, 1, 2, 2, 1, 3])
}

/// UV sphere; the degenerate triangles at the poles are skipped
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row = width_segments + 1;

    let mut vertices = Vec::with_capacity((row * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let position = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            let normal = position.normalize_or_zero();
            vertices.push(Vertex::new(position, normal, [u, 1.0 - v]));
        }
    }

    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Geometry::triangles("sphere", vertices, indices)
}

/// Capped cylinder (or frustum) along Y, one height segment
///
/// A cap is only generated for a non-zero radius.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    build_cylinder("cylinder", radius_top, radius_bottom, height, radial_segments)
}

/// Cone with its tip at +Y
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Geometry {
    build_cylinder("cone", 0.0, radius, height, radial_segments)
}

fn build_cylinder(
    label: &'static str,
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> Geometry {
    let radial_segments = radial_segments.max(3);
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;
    let row = radial_segments + 1;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Torso: two rings, top (y = 0) then bottom (y = 1)
    for y in 0..=1u32 {
        let v = y as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial_segments {
            let u = x as f32 / radial_segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let position = Vec3::new(radius * sin, -v * height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            vertices.push(Vertex::new(position, normal, [u, 1.0 - v]));
        }
    }
    for x in 0..radial_segments {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        if radius_top > 0.0 {
            indices.extend_from_slice(&[a, b, d]);
        }
        if radius_bottom > 0.0 {
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    if radius_top > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_top, half_height, true, radial_segments);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_bottom, half_height, false, radial_segments);
    }

    Geometry::triangles(label, vertices, indices)
}

fn push_cap(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    radius: f32,
    half_height: f32,
    top: bool,
    radial_segments: u32,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    // One center vertex per segment so each wedge gets its own uv
    let center_start = vertices.len() as u32;
    for _ in 0..radial_segments {
        vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]));
    }
    let ring_start = vertices.len() as u32;
    for x in 0..=radial_segments {
        let u = x as f32 / radial_segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        vertices.push(Vertex::new(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
        ));
    }

    for x in 0..radial_segments {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            indices.extend_from_slice(&[i, i + 1, c]);
        } else {
            indices.extend_from_slice(&[i + 1, i, c]);
        }
    }
}

/// Capsule along Y: a cylinder of `length` between two hemispheres
pub fn capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Geometry {
    let cap_segments = cap_segments.max(1);
    let half_length = length * 0.5;

    // Profile from the bottom pole to the top pole as (radius, y, normal)
    let mut profile: Vec<(Vec2, Vec2)> = Vec::with_capacity(2 * (cap_segments as usize + 1));
    for i in 0..=cap_segments {
        let angle = -PI * 0.5 + (i as f32 / cap_segments as f32) * PI * 0.5;
        let n = Vec2::new(angle.cos(), angle.sin());
        profile.push((Vec2::new(n.x * radius, n.y * radius - half_length), n));
    }
    for i in 0..=cap_segments {
        let angle = (i as f32 / cap_segments as f32) * PI * 0.5;
        let n = Vec2::new(angle.cos(), angle.sin());
        profile.push((Vec2::new(n.x * radius, n.y * radius + half_length), n));
    }

    lathe("capsule", &profile, radial_segments)
}

/// Revolve a (radius, y) profile with per-point 2D normals around Y
fn lathe(label: &'static str, profile: &[(Vec2, Vec2)], segments: u32) -> Geometry {
    let segments = segments.max(3);
    let rows = profile.len() as u32;
    let mut vertices = Vec::with_capacity(((segments + 1) * rows) as usize);

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        for (j, (point, normal)) in profile.iter().enumerate() {
            let position = Vec3::new(point.x * sin, point.y, point.x * cos);
            let n = Vec3::new(normal.x * sin, normal.y, normal.x * cos).normalize_or_zero();
            let v = j as f32 / (rows - 1) as f32;
            vertices.push(Vertex::new(position, n, [u, v]));
        }
    }

    let mut indices = Vec::with_capacity((segments * (rows - 1) * 6) as usize);
    for i in 0..segments {
        for j in 0..rows - 1 {
            let a = i * rows + j;
            let b = a + rows;
            let c = a + rows + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, d, c, d, b]);
        }
    }

    Geometry::triangles(label, vertices, indices)
}

/// Torus around the Z axis
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let radial_segments = radial_segments.max(2);
    let tubular_segments = tubular_segments.max(3);
    let row = tubular_segments + 1;

    let mut vertices = Vec::with_capacity((row * (radial_segments + 1)) as usize);
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let v = j as f32 / radial_segments as f32 * TAU;

            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize_or_zero();
            vertices.push(Vertex::new(
                position,
                normal,
                [i as f32 / tubular_segments as f32, j as f32 / radial_segments as f32],
            ));
        }
    }

    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::triangles("torus", vertices, indices)
}

/// (p, q) torus knot swept with a circular tube
pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Geometry {
    let tubular_segments = tubular_segments.max(3);
    let radial_segments = radial_segments.max(3);
    let row = radial_segments + 1;
    let (p, q) = (p as f32, q as f32);

    let curve = |u: f32| {
        let q_over_p = q / p * u;
        let cs = q_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * q_over_p.sin() * 0.5,
        )
    };

    let mut vertices = Vec::with_capacity((row * (tubular_segments + 1)) as usize);
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);

        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize();
        normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            vertices.push(Vertex::new(
                position,
                (position - p1).normalize_or_zero(),
                [i as f32 / tubular_segments as f32, j as f32 / radial_segments as f32],
            ));
        }
    }

    let mut indices = Vec::with_capacity((tubular_segments * radial_segments * 6) as usize);
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::triangles("torus-knot", vertices, indices)
}

use std::fmt;

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::controls::OrbitControls;

pub const CAMERA_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
/// Half height of the orthographic frustum in world units
pub const ORTHO_HALF_HEIGHT: f32 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMode {
    #[default]
    Perspective,
    Orthographic,
}

impl CameraMode {
    pub const ALL: [CameraMode; 2] = [CameraMode::Perspective, CameraMode::Orthographic];

    /// "perspective" selects perspective; any other value selects orthographic
    pub fn from_selector(value: &str) -> Self {
        if value == CameraMode::Perspective.name() {
            CameraMode::Perspective
        } else {
            CameraMode::Orthographic
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CameraMode::Perspective => "perspective",
            CameraMode::Orthographic => "orthographic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Perspective => "Perspective",
            CameraMode::Orthographic => "Orthographic",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
        zoom: f32,
    },
}

/// A camera looking down its local -Z axis
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub projection: Projection,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Camera {
    pub fn perspective(aspect: f32) -> Self {
        Self {
            projection: Projection::Perspective {
                fov_y_degrees: FOV_Y_DEGREES,
                aspect,
                near: NEAR,
                far: FAR,
            },
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn orthographic(aspect: f32) -> Self {
        Self {
            projection: Projection::Orthographic {
                left: -ORTHO_HALF_HEIGHT * aspect,
                right: ORTHO_HALF_HEIGHT * aspect,
                top: ORTHO_HALF_HEIGHT,
                bottom: -ORTHO_HALF_HEIGHT,
                near: NEAR,
                far: FAR,
                zoom: 1.0,
            },
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn mode(&self) -> CameraMode {
        match self.projection {
            Projection::Perspective { .. } => CameraMode::Perspective,
            Projection::Orthographic { .. } => CameraMode::Orthographic,
        }
    }

    /// Orient the camera so that -Z points at `target`, keeping +Y up
    pub fn look_at(&mut self, target: Vec3) {
        let back = (self.position - target).normalize_or_zero();
        if back == Vec3::ZERO {
            return;
        }
        let mut right = Vec3::Y.cross(back);
        if right.length_squared() < 1e-8 {
            right = Vec3::Z.cross(back);
        }
        let right = right.normalize();
        let up = back.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, back));
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Update projection parameters after a viewport change
    pub fn set_aspect(&mut self, new_aspect: f32) {
        match &mut self.projection {
            Projection::Perspective { aspect, .. } => *aspect = new_aspect,
            Projection::Orthographic { left, right, top, bottom, .. } => {
                let half_height = (*top - *bottom) * 0.5;
                *left = -half_height * new_aspect;
                *right = half_height * new_aspect;
            }
        }
    }

    pub fn aspect(&self) -> f32 {
        match self.projection {
            Projection::Perspective { aspect, .. } => aspect,
            Projection::Orthographic { left, right, top, bottom, .. } => (right - left) / (top - bottom),
        }
    }

    pub fn near_far(&self) -> (f32, f32) {
        match self.projection {
            Projection::Perspective { near, far, .. } | Projection::Orthographic { near, far, .. } => (near, far),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y_degrees, aspect, near, far } => {
                Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far)
            }
            Projection::Orthographic { left, right, top, bottom, near, far, zoom } => {
                Mat4::orthographic_rh(left / zoom, right / zoom, bottom / zoom, top / zoom, near, far)
            }
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// The active camera together with the view-control handler bound to it
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl CameraRig {
    /// Build a fresh camera and handler for `mode`
    ///
    /// Orthographic cameras are aimed at the origin explicitly; perspective
    /// ones keep their default orientation until the handler's first update.
    pub fn build(mode: CameraMode, aspect: f32) -> Self {
        let mut camera = match mode {
            CameraMode::Perspective => Camera::perspective(aspect),
            CameraMode::Orthographic => Camera::orthographic(aspect),
        };
        camera.position = CAMERA_POSITION;
        if mode == CameraMode::Orthographic {
            camera.look_at(Vec3::ZERO);
        }

        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.enable_damping = true;
        controls.update(&mut camera);

        Self { camera, controls }
    }

    pub fn mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn update(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selector() {
        assert_eq!(CameraMode::from_selector("perspective"), CameraMode::Perspective);
        assert_eq!(CameraMode::from_selector("orthographic"), CameraMode::Orthographic);
        assert_eq!(CameraMode::from_selector("fisheye"), CameraMode::Orthographic);
    }

    #[test]
    fn test_look_at_points_forward() {
        let mut camera = Camera::perspective(1.0);
        camera.position = CAMERA_POSITION;
        camera.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - CAMERA_POSITION).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
        assert!(camera.up().y > 0.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let rig = CameraRig::build(CameraMode::Perspective, 16.0 / 9.0);
        let ndc = rig.camera.view_proj().project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!((0.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn test_orthographic_frustum_from_aspect() {
        let camera = Camera::orthographic(2.0);
        match camera.projection {
            Projection::Orthographic { left, right, top, bottom, .. } => {
                assert_eq!((left, right, top, bottom), (-10.0, 10.0, 5.0, -5.0));
            }
            _ => panic!("expected orthographic"),
        }
    }

    #[test]
    fn test_set_aspect_perspective() {
        let mut camera = Camera::perspective(1.0);
        camera.set_aspect(1.5);
        assert_eq!(camera.aspect(), 1.5);
    }

    #[test]
    fn test_set_aspect_orthographic() {
        let mut camera = Camera::orthographic(1.0);
        camera.set_aspect(2.0);
        assert!((camera.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_rig_position() {
        for mode in CameraMode::ALL {
            let rig = CameraRig::build(mode, 1.0);
            assert_eq!(rig.mode(), mode);
            assert!((rig.camera.position - CAMERA_POSITION).length() < 1e-4);
            assert!(rig.controls.enable_damping);
        }
    }
}

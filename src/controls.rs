use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Projection};

pub const DAMPING_FACTOR: f32 = 0.05;
pub const ZOOM_STEP: f32 = 0.95;
const EPSILON: f32 = 1e-6;
const MIN_POLAR: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Rotate,
    Pan,
}

/// Pending orbit input, applied to the camera on the next `update`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

/// Orbit the camera around a target point: primary drag rotates, secondary
/// drag pans and the wheel dollies (perspective) or zooms (orthographic)
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    delta: SphericalDelta,
    scale: f32,
    pan_offset: Vec3,
    drag: DragState,
    last_pointer: Vec2,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: false,
            damping_factor: DAMPING_FACTOR,
            delta: SphericalDelta::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            drag: DragState::Idle,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    pub fn pointer_down(&mut self, button: PointerButton, position: Vec2) {
        self.drag = match button {
            PointerButton::Primary => DragState::Rotate,
            PointerButton::Secondary | PointerButton::Middle => DragState::Pan,
        };
        self.last_pointer = position;
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Accumulate a drag of the pointer to `position` (in physical pixels)
    pub fn pointer_move(&mut self, position: Vec2, camera: &Camera, viewport_height: f32) {
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        let height = viewport_height.max(1.0);

        match self.drag {
            DragState::Idle => {}
            DragState::Rotate => {
                self.delta.theta -= TAU * delta.x / height;
                self.delta.phi -= TAU * delta.y / height;
            }
            DragState::Pan => self.pan(delta, camera, height),
        }
    }

    /// Positive `delta_y` scrolls towards the user and moves the camera away
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.scale /= ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.scale *= ZOOM_STEP;
        }
    }

    fn pan(&mut self, delta: Vec2, camera: &Camera, height: f32) {
        let world_per_pixel = match camera.projection {
            Projection::Perspective { fov_y_degrees, .. } => {
                let distance = (camera.position - self.target).length();
                2.0 * distance * (fov_y_degrees.to_radians() * 0.5).tan() / height
            }
            Projection::Orthographic { top, bottom, zoom, .. } => (top - bottom) / zoom / height,
        };
        self.pan_offset += (-camera.right() * delta.x + camera.up() * delta.y) * world_per_pixel;
    }

    /// Apply pending input to `camera` and aim it at the target
    ///
    /// Returns true when the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = (camera.position, camera.rotation);
        let offset = camera.position - self.target;

        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        let step = if self.enable_damping { self.damping_factor } else { 1.0 };
        theta += self.delta.theta * step;
        phi = (phi + self.delta.phi * step).clamp(MIN_POLAR, PI - MIN_POLAR);

        match &mut camera.projection {
            Projection::Perspective { .. } => radius *= self.scale,
            Projection::Orthographic { zoom, .. } => *zoom = (*zoom / self.scale).max(EPSILON),
        }
        self.target += self.pan_offset * step;

        let sin_phi = phi.sin();
        let offset = Vec3::new(radius * sin_phi * theta.sin(), radius * phi.cos(), radius * sin_phi * theta.cos());
        camera.position = self.target + offset;
        camera.look_at(self.target);

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.delta.theta *= decay;
            self.delta.phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.delta = SphericalDelta::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let (position, rotation) = before;
        position.distance_squared(camera.position) > EPSILON || rotation.dot(camera.rotation).abs() < 1.0 - EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CAMERA_POSITION;

    fn perspective_camera() -> Camera {
        let mut camera = Camera::perspective(1.0);
        camera.position = CAMERA_POSITION;
        camera
    }

    #[test]
    fn test_first_update_aims_at_target() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        assert!(controls.update(&mut camera));
        let expected = (-CAMERA_POSITION).normalize();
        assert!((camera.forward() - expected).length() < 1e-4);
        assert!((camera.position - CAMERA_POSITION).length() < 1e-4);
    }

    #[test]
    fn test_idle_update_is_stable() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.enable_damping = true;
        controls.update(&mut camera);
        assert!(!controls.update(&mut camera));
    }

    #[test]
    fn test_rotate_drag_keeps_radius() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        let radius = camera.position.length();

        controls.pointer_down(PointerButton::Primary, Vec2::new(100.0, 100.0));
        controls.pointer_move(Vec2::new(160.0, 100.0), &camera, 600.0);
        controls.pointer_up();
        controls.update(&mut camera);

        assert!((camera.position.length() - radius).abs() < 1e-3);
        assert!((camera.position - CAMERA_POSITION).length() > 0.1);
    }

    #[test]
    fn test_damping_spreads_motion() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.enable_damping = true;
        controls.pointer_down(PointerButton::Primary, Vec2::ZERO);
        controls.pointer_move(Vec2::new(50.0, 0.0), &camera, 600.0);
        controls.pointer_up();

        let first = camera.position;
        controls.update(&mut camera);
        let after_one = camera.position;
        controls.update(&mut camera);
        assert!(first.distance(after_one) > 0.0);
        assert!(after_one.distance(camera.position) > 0.0);
        assert!(after_one.distance(camera.position) < first.distance(after_one));
    }

    #[test]
    fn test_wheel_dollies_perspective() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        let radius = camera.position.length();
        controls.wheel(-1.0);
        controls.update(&mut camera);
        assert!((camera.position.length() - radius * ZOOM_STEP).abs() < 1e-3);
    }

    #[test]
    fn test_wheel_zooms_orthographic() {
        let mut camera = Camera::orthographic(1.0);
        camera.position = CAMERA_POSITION;
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.wheel(-1.0);
        controls.update(&mut camera);
        match camera.projection {
            Projection::Orthographic { zoom, .. } => assert!(zoom > 1.0),
            _ => panic!("expected orthographic"),
        }
        assert!((camera.position - CAMERA_POSITION).length() < 1e-3);
    }

    #[test]
    fn test_pan_moves_target() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.update(&mut camera);
        controls.pointer_down(PointerButton::Secondary, Vec2::ZERO);
        controls.pointer_move(Vec2::new(30.0, 0.0), &camera, 600.0);
        controls.update(&mut camera);
        assert!(controls.target.length() > 0.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut camera = perspective_camera();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.update(&mut camera);
        controls.pointer_move(Vec2::new(300.0, 300.0), &camera, 600.0);
        assert!(!controls.update(&mut camera));
    }
}

//! GPU-side uniform records. Field order and padding mirror the structs in
//! `shaders/scene.wgsl`.

use glam::{Mat4, Vec3};

use crate::camera::{Camera, CameraMode};
use crate::light::{Light, LightSource};
use crate::material::Material;
use crate::math::{Color, Transform};

pub const SHADOW_MAP_SIZE: u32 = 2048;

/// Distance between object records in the dynamic uniform buffer
pub const OBJECT_STRIDE: u64 = 256;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    /// rgb premultiplied by intensity
    pub light_color: [f32; 4],
    /// xyz position, w cutoff distance (0 = none)
    pub light_position: [f32; 4],
    /// xyz unit direction the light travels, w decay exponent
    pub light_direction: [f32; 4],
    /// Hemisphere ground color premultiplied by intensity
    pub ground_color: [f32; 4],
    /// x cos(outer cone), y cos(inner cone), z shadow texel size
    pub spot: [f32; 4],
    /// x light kind, y shadows on, z camera mode
    pub info: [u32; 4],
}

impl FrameUniform {
    pub fn new(camera: &Camera, light: Option<&Light>, shadows: bool) -> Self {
        let mode = match camera.mode() {
            CameraMode::Perspective => 0,
            CameraMode::Orthographic => 1,
        };
        let mut uniform = Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            light_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_position: camera.position.extend(1.0).to_array(),
            light_color: [0.0; 4],
            light_position: [0.0; 4],
            light_direction: [0.0, -1.0, 0.0, 0.0],
            ground_color: [0.0; 4],
            spot: [0.0, 0.0, 1.0 / SHADOW_MAP_SIZE as f32, 0.0],
            info: [0, 0, mode, 0],
        };
        if let Some(light) = light {
            uniform.encode_light(light, shadows);
        }
        uniform
    }

    fn encode_light(&mut self, light: &Light, shadows: bool) {
        self.info[0] = light.kind().code();
        match light.source {
            LightSource::Ambient { color, intensity } => {
                self.light_color = color.scaled(intensity).to_vec4(1.0);
            }
            LightSource::Directional { color, intensity, position, target } => {
                self.light_color = color.scaled(intensity).to_vec4(1.0);
                self.light_position = position.extend(0.0).to_array();
                self.light_direction = direction(position, target).extend(0.0).to_array();
            }
            LightSource::Hemisphere { sky, ground, intensity, position } => {
                self.light_color = sky.scaled(intensity).to_vec4(1.0);
                self.ground_color = ground.scaled(intensity).to_vec4(1.0);
                // Up axis of the hemisphere
                self.light_direction = position.normalize_or(Vec3::Y).extend(0.0).to_array();
            }
            LightSource::Point { color, intensity, distance, decay, position } => {
                self.light_color = color.scaled(intensity).to_vec4(1.0);
                self.light_position = position.extend(distance).to_array();
                self.light_direction[3] = decay;
            }
            LightSource::Spot { color, intensity, distance, angle, penumbra, decay, position, target } => {
                self.light_color = color.scaled(intensity).to_vec4(1.0);
                self.light_position = position.extend(distance).to_array();
                self.light_direction = direction(position, target).extend(decay).to_array();
                self.spot[0] = angle.cos();
                self.spot[1] = (angle * (1.0 - penumbra)).cos();
            }
        }

        if shadows && light.cast_shadow {
            if let Some(view_proj) = light.shadow_view_proj() {
                self.light_view_proj = view_proj.to_cols_array_2d();
                self.info[1] = 1;
            }
        }
    }

    pub fn shadows_on(&self) -> bool {
        self.info[1] != 0
    }
}

fn direction(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or(Vec3::NEG_Y)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x roughness, y metalness, z shininess
    pub surface: [f32; 4],
    /// x shading model, y receives shadow, z line draw
    pub info: [u32; 4],
}

impl ObjectUniform {
    pub fn mesh(transform: &Transform, material: &Material, receive_shadow: bool) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
            normal_matrix: transform.normal_matrix().to_cols_array_2d(),
            color: material.color.to_vec4(1.0),
            surface: [material.roughness, material.metalness, material.shininess, 0.0],
            info: [material.shading.code(), receive_shadow as u32, material.wireframe as u32, 0],
        }
    }

    /// Flat-colored lines in world space
    pub fn lines(color: Color) -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            normal_matrix: Mat4::IDENTITY.to_cols_array_2d(),
            color: color.to_vec4(1.0),
            surface: [0.0; 4],
            info: [0, 0, 1, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::LightKind;

    #[test]
    fn test_uniform_sizes() {
        assert_eq!(std::mem::size_of::<FrameUniform>(), 304);
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 176);
        assert!(std::mem::size_of::<ObjectUniform>() as u64 <= OBJECT_STRIDE);
    }

    #[test]
    fn test_no_light() {
        let uniform = FrameUniform::new(&Camera::perspective(1.0), None, true);
        assert_eq!(uniform.info[0], 0);
        assert!(!uniform.shadows_on());
    }

    #[test]
    fn test_spot_encoding() {
        let light = Light::build(LightKind::Spot);
        let uniform = FrameUniform::new(&Camera::perspective(1.0), Some(&light), false);
        assert_eq!(uniform.info[0], LightKind::Spot.code());
        assert_eq!(uniform.light_color[0], 20.0);
        assert_eq!(uniform.light_position, [5.0, 10.0, 5.0, 50.0]);
        assert_eq!(uniform.light_direction[3], 1.0);
        assert!(uniform.spot[1] > uniform.spot[0]);
    }

    #[test]
    fn test_shadows_need_casting_light() {
        let mut light = Light::build(LightKind::Directional);
        let camera = Camera::perspective(1.0);
        assert!(!FrameUniform::new(&camera, Some(&light), true).shadows_on());
        light.cast_shadow = true;
        assert!(FrameUniform::new(&camera, Some(&light), true).shadows_on());
        assert!(!FrameUniform::new(&camera, Some(&light), false).shadows_on());
    }

    #[test]
    fn test_hemisphere_colors() {
        let light = Light::build(LightKind::Hemisphere);
        let uniform = FrameUniform::new(&Camera::perspective(1.0), Some(&light), false);
        assert_eq!(uniform.light_color[..3], [1.0, 1.0, 1.0]);
        assert_eq!(uniform.ground_color[..3], [0.0, 0.0, 1.0]);
        assert_eq!(uniform.light_direction[..3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_line_object_flags() {
        let object = ObjectUniform::lines(Color::WHITE);
        assert_eq!(object.info[2], 1);
        assert_eq!(object.info[0], 0);
    }
}

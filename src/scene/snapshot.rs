use glam::Vec3;
use serde::Serialize;

use super::state::SceneState;
use crate::camera::CameraMode;
use crate::light::LightKind;
use crate::material::MaterialKind;
use crate::shape::ShapeKind;

/// Serializable summary of the current slots, logged after routed events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub preset: &'static str,
    pub shape: Option<ShapeKind>,
    pub material: MaterialKind,
    pub light: Option<LightKind>,
    pub camera: CameraMode,
    pub shadows: bool,
    pub mesh_cast_shadow: Option<bool>,
    pub mesh_rotation: Option<Vec3>,
    pub plane_receive_shadow: bool,
    pub light_cast_shadow: Option<bool>,
    pub meshes: usize,
    pub lights: usize,
    pub helpers: usize,
    pub viewport: [u32; 2],
    pub aspect: f32,
}

impl SceneSnapshot {
    pub fn capture(state: &SceneState) -> Self {
        let scene = state.scene();
        let mesh = state.current_mesh();
        let light = state.current_light();
        let viewport = state.viewport();
        Self {
            preset: state.preset().name,
            shape: state.shape(),
            material: state.material_kind(),
            light: light.map(|l| l.kind()),
            camera: state.camera().mode(),
            shadows: state.shadows_enabled(),
            mesh_cast_shadow: mesh.map(|m| m.cast_shadow),
            mesh_rotation: mesh.map(|m| m.transform.rotation),
            plane_receive_shadow: state.plane().is_some_and(|p| p.receive_shadow),
            light_cast_shadow: light.map(|l| l.cast_shadow),
            meshes: scene.meshes().count(),
            lights: scene.lights().count(),
            helpers: scene.helpers().count(),
            viewport: [viewport.width, viewport.height],
            aspect: state.camera().aspect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

//! The scene state holder: owns the scene and the "current" slots, and
//! guarantees that at most one mesh and one light are attached at a time.

use std::sync::Arc;

use glam::Vec3;
use log::{debug, info, warn};

use super::graph::{Mesh, Node, NodeId, Scene};
use super::snapshot::SceneSnapshot;
use crate::camera::{Camera, CameraMode, CameraRig};
use crate::config::{AppConfig, HelperPolicy, ScenePreset};
use crate::geometry;
use crate::helper::Helper;
use crate::light::{Light, LightKind};
use crate::material::{ground_material, MaterialKind, MaterialRegistry};
use crate::math::Transform;
use crate::shape::{ShapeFactory, ShapeKind};

/// Rotation added to the current mesh about X and Y on every tick
pub const ROTATION_STEP: f32 = 0.01;
pub const PLANE_SIZE: f32 = 12.0;
pub const AXES_SIZE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Renderer-wide switches owned by the scene state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererSettings {
    pub shadow_map_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SceneState {
    scene: Scene,
    preset: ScenePreset,
    helper_policy: HelperPolicy,
    factory: ShapeFactory,
    registry: MaterialRegistry,
    material: MaterialKind,
    shape: Option<ShapeKind>,
    current_mesh: Option<NodeId>,
    current_light: Option<NodeId>,
    light_helper: Option<NodeId>,
    plane: NodeId,
    axes: NodeId,
    rig: CameraRig,
    renderer: RendererSettings,
    viewport: Viewport,
}

impl SceneState {
    /// Build the startup scene: ground plane, axes, a box and a perspective
    /// camera. No light is attached until one is selected.
    pub fn new(preset: ScenePreset, viewport: Viewport) -> Self {
        let mut scene = Scene::new();

        let mut plane = Mesh::new(
            Arc::new(geometry::plane(PLANE_SIZE, PLANE_SIZE)),
            Arc::new(ground_material()),
        );
        plane.transform = Transform::IDENTITY.with_rotation(Vec3::new(preset.plane_tilt, 0.0, 0.0));
        plane.receive_shadow = preset.plane_receives_shadow;
        let plane = scene.add(Node::Mesh(plane));
        let axes = scene.add(Node::Helper(Helper::axes(AXES_SIZE)));

        let mut state = Self {
            scene,
            preset,
            helper_policy: HelperPolicy::default(),
            factory: ShapeFactory::new(preset.capsule_length),
            registry: MaterialRegistry::new(),
            material: MaterialKind::Basic,
            shape: None,
            current_mesh: None,
            current_light: None,
            light_helper: None,
            plane,
            axes,
            rig: CameraRig::build(CameraMode::Perspective, viewport.aspect()),
            renderer: RendererSettings::default(),
            viewport,
        };
        state.select_shape(ShapeKind::Box);
        info!("Scene ready with preset '{}'", preset.name);
        state
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut state = Self::new(config.preset, Viewport::new(config.width, config.height))
            .with_helper_policy(config.helper_policy);
        if config.shadows {
            state.set_shadows(true);
        }
        state
    }

    pub fn with_helper_policy(mut self, policy: HelperPolicy) -> Self {
        self.helper_policy = policy;
        self
    }

    /// Select a shape by key; unmapped keys leave the scene untouched
    pub fn select_shape_key(&mut self, key: &str) -> Option<ShapeKind> {
        let kind = ShapeKind::from_key(key)?;
        self.select_shape(kind);
        Some(kind)
    }

    /// Replace the current mesh with a fresh one of `kind`
    pub fn select_shape(&mut self, kind: ShapeKind) {
        if let Some(old) = self.current_mesh.take() {
            self.scene.remove(old);
        }

        let mut mesh = Mesh::new(self.factory.build(kind), self.registry.get(self.material).clone());
        mesh.transform = Transform::from_position(Vec3::new(0.0, self.preset.mesh_height, 0.0));
        mesh.cast_shadow = true;

        self.current_mesh = Some(self.scene.add(Node::Mesh(mesh)));
        self.shape = Some(kind);
        debug!("Shape -> {kind}");
    }

    /// Swap the material of the current mesh; unknown names are ignored
    pub fn select_material(&mut self, name: &str) -> Option<MaterialKind> {
        let Some((kind, material)) = self.registry.lookup(name) else {
            warn!("Unknown material '{name}' ignored");
            return None;
        };
        let material = material.clone();
        self.material = kind;
        if let Some(mesh) = self.current_mesh_mut() {
            mesh.material = material;
        }
        debug!("Material -> {kind}");
        Some(kind)
    }

    /// Replace the current light; unknown values fall back to ambient
    pub fn select_light(&mut self, value: &str) -> LightKind {
        if let Some(old) = self.current_light.take() {
            self.scene.remove(old);
        }
        if let Some(helper) = self.light_helper.take() {
            if self.helper_policy == HelperPolicy::Replace {
                self.scene.remove(helper);
            }
        }

        let kind = LightKind::from_selector(value);
        let light = Light::build(kind);
        if let Some(helper) = light.helper() {
            self.light_helper = Some(self.scene.add(Node::Helper(helper)));
        }
        self.current_light = Some(self.scene.add(Node::Light(light)));
        debug!("Light -> {kind}");
        kind
    }

    /// Replace the camera and its view-control handler
    pub fn select_camera(&mut self, value: &str) -> CameraMode {
        let mode = CameraMode::from_selector(value);
        self.rig = CameraRig::build(mode, self.viewport.aspect());
        debug!("Camera -> {mode}");
        mode
    }

    /// Apply the shadow flag to the renderer and to the objects attached now
    pub fn set_shadows(&mut self, enabled: bool) {
        self.renderer.shadow_map_enabled = enabled;
        if let Some(mesh) = self.current_mesh_mut() {
            mesh.cast_shadow = enabled;
        }
        if let Some(plane) = self.scene.get_mut(self.plane).and_then(Node::as_mesh_mut) {
            plane.receive_shadow = enabled;
        }
        if let Some(light) = self.current_light.and_then(|id| self.scene.get_mut(id)).and_then(Node::as_light_mut) {
            light.cast_shadow = enabled;
        }
        debug!("Shadows -> {enabled}");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.rig.camera.set_aspect(self.viewport.aspect());
    }

    /// Advance one frame: spin the current mesh and integrate view damping
    pub fn tick(&mut self) {
        if let Some(mesh) = self.current_mesh_mut() {
            mesh.transform.rotation.x += ROTATION_STEP;
            mesh.transform.rotation.y += ROTATION_STEP;
        }
        self.rig.update();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn preset(&self) -> &ScenePreset {
        &self.preset
    }

    pub fn helper_policy(&self) -> HelperPolicy {
        self.helper_policy
    }

    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    pub fn material_kind(&self) -> MaterialKind {
        self.material
    }

    pub fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    pub fn current_mesh_id(&self) -> Option<NodeId> {
        self.current_mesh
    }

    pub fn current_mesh(&self) -> Option<&Mesh> {
        self.current_mesh.and_then(|id| self.scene.get(id)).and_then(Node::as_mesh)
    }

    fn current_mesh_mut(&mut self) -> Option<&mut Mesh> {
        self.current_mesh.and_then(|id| self.scene.get_mut(id)).and_then(Node::as_mesh_mut)
    }

    pub fn current_light_id(&self) -> Option<NodeId> {
        self.current_light
    }

    pub fn current_light(&self) -> Option<&Light> {
        self.current_light.and_then(|id| self.scene.get(id)).and_then(Node::as_light)
    }

    pub fn light_helper_id(&self) -> Option<NodeId> {
        self.light_helper
    }

    pub fn plane_id(&self) -> NodeId {
        self.plane
    }

    pub fn plane(&self) -> Option<&Mesh> {
        self.scene.get(self.plane).and_then(Node::as_mesh)
    }

    pub fn axes_id(&self) -> NodeId {
        self.axes
    }

    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn renderer(&self) -> RendererSettings {
        self.renderer
    }

    pub fn shadows_enabled(&self) -> bool {
        self.renderer.shadow_map_enabled
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SceneState {
        SceneState::new(ScenePreset::PLAYGROUND, Viewport::new(800, 600))
    }

    #[test]
    fn test_startup_scene() {
        let state = state();
        let scene = state.scene();
        assert_eq!(scene.meshes().count(), 2);
        assert_eq!(scene.helpers().count(), 1);
        assert_eq!(scene.lights().count(), 0);
        assert_eq!(state.shape(), Some(ShapeKind::Box));
        assert!(!state.shadows_enabled());
        assert!(state.plane().is_some_and(|p| p.receive_shadow));
        assert!(scene.contains(state.axes_id()));
    }

    #[test]
    fn test_shape_replaces_mesh() {
        let mut state = state();
        let old = state.current_mesh_id();
        assert_eq!(state.select_shape_key("6"), Some(ShapeKind::Torus));
        assert!(!state.scene().contains(old.unwrap()));
        assert_eq!(state.scene().meshes().count(), 2);

        let mesh = state.current_mesh().unwrap();
        assert_eq!(mesh.transform.position, Vec3::new(0.0, 2.0, 0.0));
        assert!(mesh.cast_shadow);
        assert_eq!(mesh.geometry.label(), "torus");
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut state = state();
        let before = state.current_mesh_id();
        assert_eq!(state.select_shape_key("x"), None);
        assert_eq!(state.current_mesh_id(), before);
        assert_eq!(state.scene().len(), 3);
    }

    #[test]
    fn test_material_keeps_geometry() {
        let mut state = state();
        let geometry = state.current_mesh().unwrap().geometry.clone();
        assert_eq!(state.select_material("toon"), Some(MaterialKind::Toon));
        let mesh = state.current_mesh().unwrap();
        assert!(Arc::ptr_eq(&mesh.geometry, &geometry));
        assert!(Arc::ptr_eq(&mesh.material, state.registry().get(MaterialKind::Toon)));
    }

    #[test]
    fn test_unknown_material_is_noop() {
        let mut state = state();
        state.select_material("phong");
        assert_eq!(state.select_material("velvet"), None);
        assert_eq!(state.material_kind(), MaterialKind::Phong);
    }

    #[test]
    fn test_material_survives_shape_swap() {
        let mut state = state();
        state.select_material("normal");
        state.select_shape_key("5");
        let mesh = state.current_mesh().unwrap();
        assert!(Arc::ptr_eq(&mesh.material, state.registry().get(MaterialKind::Normal)));
    }

    #[test]
    fn test_single_light() {
        let mut state = state();
        for value in ["ambient", "directional", "hemisphere", "point", "spot", "bogus"] {
            state.select_light(value);
            assert_eq!(state.scene().lights().count(), 1, "{value}");
        }
        assert_eq!(state.current_light().unwrap().kind(), LightKind::Ambient);
    }

    #[test]
    fn test_helpers_replaced_with_light() {
        let mut state = state();
        state.select_light("point");
        state.select_light("spot");
        assert_eq!(state.scene().helpers().count(), 2);
        state.select_light("ambient");
        assert_eq!(state.scene().helpers().count(), 1);
        assert!(state.light_helper_id().is_none());
    }

    #[test]
    fn test_helpers_accumulate() {
        let mut state = state().with_helper_policy(HelperPolicy::Accumulate);
        state.select_light("point");
        state.select_light("spot");
        state.select_light("directional");
        assert_eq!(state.scene().helpers().count(), 4);
        assert_eq!(state.scene().lights().count(), 1);
    }

    #[test]
    fn test_shadow_toggle_applies_at_toggle_time() {
        let mut state = state();
        state.select_light("spot");
        state.set_shadows(true);
        assert!(state.shadows_enabled());
        assert!(state.current_mesh().unwrap().cast_shadow);
        assert!(state.plane().unwrap().receive_shadow);
        assert!(state.current_light().unwrap().cast_shadow);

        state.select_light("point");
        assert!(!state.current_light().unwrap().cast_shadow);

        state.set_shadows(false);
        assert!(!state.current_mesh().unwrap().cast_shadow);
        assert!(!state.plane().unwrap().receive_shadow);
        state.select_shape_key("1");
        assert!(state.current_mesh().unwrap().cast_shadow);
    }

    #[test]
    fn test_tick_rotates_mesh() {
        let mut state = state();
        state.tick();
        state.tick();
        let rotation = state.current_mesh().unwrap().transform.rotation;
        assert!((rotation.x - 0.02).abs() < 1e-6);
        assert!((rotation.y - 0.02).abs() < 1e-6);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_camera_switch() {
        let mut state = state();
        assert_eq!(state.select_camera("orthographic"), CameraMode::Orthographic);
        assert_eq!(state.camera().mode(), CameraMode::Orthographic);
        assert_eq!(state.select_camera("perspective"), CameraMode::Perspective);
        assert_eq!(state.camera().mode(), CameraMode::Perspective);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut state = state();
        state.resize(1000, 500);
        assert!((state.camera().aspect() - 2.0).abs() < 1e-6);
        state.select_camera("orthographic");
        state.resize(300, 300);
        assert!((state.camera().aspect() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_simple_preset() {
        let mut state = SceneState::new(ScenePreset::SIMPLE, Viewport::new(800, 600));
        state.select_shape_key("2");
        let mesh = state.current_mesh().unwrap();
        assert_eq!(mesh.transform.position.y, 1.0);
        assert!((mesh.geometry.bounds().1.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_config_applies_shadows() {
        let config = AppConfig {
            shadows: true,
            ..AppConfig::default()
        };
        let state = SceneState::from_config(&config);
        assert!(state.shadows_enabled());
        assert!(state.current_mesh().unwrap().cast_shadow);
    }
}

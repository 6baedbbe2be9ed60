//! Fixed table of shading materials, built once and shared between meshes.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialKind {
    Basic,
    Standard,
    Physical,
    Phong,
    Lambert,
    Toon,
    Normal,
    Matcap,
    Depth,
    Wireframe,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 10] = [
        MaterialKind::Basic,
        MaterialKind::Standard,
        MaterialKind::Physical,
        MaterialKind::Phong,
        MaterialKind::Lambert,
        MaterialKind::Toon,
        MaterialKind::Normal,
        MaterialKind::Matcap,
        MaterialKind::Depth,
        MaterialKind::Wireframe,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Basic => "basic",
            MaterialKind::Standard => "standard",
            MaterialKind::Physical => "physical",
            MaterialKind::Phong => "phong",
            MaterialKind::Lambert => "lambert",
            MaterialKind::Toon => "toon",
            MaterialKind::Normal => "normal",
            MaterialKind::Matcap => "matcap",
            MaterialKind::Depth => "depth",
            MaterialKind::Wireframe => "wireframe",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lighting model evaluated in the fragment shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadingModel {
    Unlit,
    Lambert,
    Phong,
    Standard,
    Physical,
    Toon,
    Normal,
    Matcap,
    Depth,
}

impl ShadingModel {
    /// Discriminant shared with `scene.wgsl`
    pub fn code(self) -> u32 {
        match self {
            ShadingModel::Unlit => 0,
            ShadingModel::Lambert => 1,
            ShadingModel::Phong => 2,
            ShadingModel::Standard => 3,
            ShadingModel::Physical => 4,
            ShadingModel::Toon => 5,
            ShadingModel::Normal => 6,
            ShadingModel::Matcap => 7,
            ShadingModel::Depth => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub shading: ShadingModel,
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub shininess: f32,
    pub wireframe: bool,
    pub double_sided: bool,
}

impl Material {
    pub fn new(shading: ShadingModel, color: Color) -> Self {
        Self {
            shading,
            color,
            roughness: 1.0,
            metalness: 0.0,
            shininess: 30.0,
            wireframe: false,
            double_sided: false,
        }
    }

    pub fn with_surface(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }

    pub fn with_wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Whether the shader needs the scene light at all
    pub fn is_lit(&self) -> bool {
        matches!(
            self.shading,
            ShadingModel::Lambert
                | ShadingModel::Phong
                | ShadingModel::Standard
                | ShadingModel::Physical
                | ShadingModel::Toon
        )
    }
}

/// Name-to-material lookup, populated once at startup
#[derive(Debug, Clone)]
pub struct MaterialRegistry {
    materials: [Arc<Material>; 10],
}

impl MaterialRegistry {
    pub fn new() -> Self {
        let purple = Color::from_hex(0x800080);
        let materials = MaterialKind::ALL.map(|kind| {
            let material = match kind {
                MaterialKind::Basic => Material::new(ShadingModel::Unlit, purple),
                MaterialKind::Standard => Material::new(ShadingModel::Standard, purple).with_surface(0.5, 0.5),
                MaterialKind::Physical => Material::new(ShadingModel::Physical, purple).with_surface(0.5, 0.5),
                MaterialKind::Phong => Material::new(ShadingModel::Phong, purple),
                MaterialKind::Lambert => Material::new(ShadingModel::Lambert, purple),
                MaterialKind::Toon => Material::new(ShadingModel::Toon, purple),
                MaterialKind::Normal => Material::new(ShadingModel::Normal, Color::WHITE),
                MaterialKind::Matcap => Material::new(ShadingModel::Matcap, purple),
                MaterialKind::Depth => Material::new(ShadingModel::Depth, Color::WHITE),
                MaterialKind::Wireframe => Material::new(ShadingModel::Unlit, purple).with_wireframe(),
            };
            Arc::new(material)
        });
        Self { materials }
    }

    pub fn get(&self, kind: MaterialKind) -> &Arc<Material> {
        &self.materials[kind.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<(MaterialKind, &Arc<Material>)> {
        MaterialKind::from_name(name).map(|kind| (kind, self.get(kind)))
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Material of the ground plane: white, metallic, visible from both sides
pub fn ground_material() -> Material {
    Material::new(ShadingModel::Physical, Color::WHITE)
        .with_surface(0.5, 1.0)
        .double_sided()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in MaterialKind::ALL {
            assert_eq!(MaterialKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(MaterialKind::from_name("glass"), None);
    }

    #[test]
    fn test_registry_returns_shared_instances() {
        let registry = MaterialRegistry::new();
        let a = registry.get(MaterialKind::Toon);
        let b = registry.get(MaterialKind::Toon);
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_index_matches_kind() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.get(MaterialKind::Normal).shading, ShadingModel::Normal);
        assert_eq!(registry.get(MaterialKind::Depth).shading, ShadingModel::Depth);
        assert_eq!(registry.get(MaterialKind::Physical).shading, ShadingModel::Physical);
    }

    #[test]
    fn test_wireframe_is_purple_basic() {
        let registry = MaterialRegistry::new();
        let wire = registry.get(MaterialKind::Wireframe);
        assert!(wire.wireframe);
        assert_eq!(wire.shading, ShadingModel::Unlit);
        assert_eq!(wire.color, Color::named("purple").unwrap());
    }

    #[test]
    fn test_standard_surface() {
        let registry = MaterialRegistry::new();
        let standard = registry.get(MaterialKind::Standard);
        assert_eq!(standard.roughness, 0.5);
        assert_eq!(standard.metalness, 0.5);
        assert!(standard.is_lit());
        assert!(!registry.get(MaterialKind::Basic).is_lit());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(MaterialRegistry::new().lookup("chrome").is_none());
    }

    #[test]
    fn test_ground_material() {
        let ground = ground_material();
        assert!(ground.double_sided);
        assert_eq!(ground.metalness, 1.0);
    }
}

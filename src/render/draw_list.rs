//! Flattens the scene into an ordered list of draws. Kept free of GPU types
//! so the decisions made here can be checked without a device.

use std::sync::Arc;

use crate::geometry::{Geometry, Topology};
use crate::math::Color;
use crate::scene::{Node, SceneState};

use super::uniforms::{FrameUniform, ObjectUniform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTopology {
    /// Filled triangles, back faces culled
    Fill,
    /// Filled triangles seen from both sides
    FillDoubleSided,
    /// Triangle edges of a mesh drawn as lines
    Wire,
    /// Line-list geometry
    Lines,
}

impl DrawTopology {
    pub fn is_line(self) -> bool {
        matches!(self, DrawTopology::Wire | DrawTopology::Lines)
    }
}

#[derive(Debug, Clone)]
pub struct DrawItem {
    pub geometry: Arc<Geometry>,
    pub topology: DrawTopology,
    pub object: ObjectUniform,
    pub cast_shadow: bool,
}

#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear: Color,
    pub frame: FrameUniform,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn build(state: &SceneState) -> Self {
        let frame = FrameUniform::new(state.camera(), state.current_light(), state.shadows_enabled());
        let mut items = Vec::new();

        for (_, node) in state.scene().iter() {
            match node {
                Node::Mesh(mesh) => {
                    let material = &mesh.material;
                    let topology = match (material.wireframe, material.double_sided) {
                        (true, _) => DrawTopology::Wire,
                        (false, true) => DrawTopology::FillDoubleSided,
                        (false, false) => DrawTopology::Fill,
                    };
                    items.push(DrawItem {
                        geometry: mesh.geometry.clone(),
                        topology,
                        object: ObjectUniform::mesh(&mesh.transform, material, mesh.receive_shadow),
                        cast_shadow: mesh.cast_shadow,
                    });
                }
                Node::Helper(helper) => {
                    items.extend(helper.batches.iter().map(|batch| DrawItem {
                        geometry: batch.geometry.clone(),
                        topology: DrawTopology::Lines,
                        object: ObjectUniform::lines(batch.color),
                        cast_shadow: false,
                    }));
                }
                Node::Light(_) => {}
            }
        }

        debug_assert!(items
            .iter()
            .all(|item| (item.topology == DrawTopology::Lines) == (item.geometry.topology() == Topology::Lines)));

        Self {
            clear: state.scene().background,
            frame,
            items,
        }
    }

    /// Whether a depth pass from the light is needed this frame
    pub fn shadow_pass(&self) -> bool {
        self.frame.shadows_on() && self.shadow_casters().next().is_some()
    }

    pub fn shadow_casters(&self) -> impl Iterator<Item = (usize, &DrawItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.cast_shadow && !item.topology.is_line())
    }
}

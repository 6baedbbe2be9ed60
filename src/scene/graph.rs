//! Retained scene container. Nodes are owned by the scene and addressed by
//! handles that are never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::geometry::Geometry;
use crate::helper::Helper;
use crate::light::Light;
use crate::material::Material;
use crate::math::{Color, Transform};

pub const BACKGROUND: u32 = 0x202020;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Arc<Geometry>,
    pub material: Arc<Material>,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Mesh(Mesh),
    Light(Light),
    Helper(Helper),
}

impl Node {
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Node::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            Node::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Node::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match self {
            Node::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_helper(&self) -> Option<&Helper> {
        match self {
            Node::Helper(helper) => Some(helper),
            _ => None,
        }
    }
}

/// Ordered collection of attached nodes
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    nodes: BTreeMap<NodeId, Node>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: Color::from_hex(BACKGROUND),
            nodes: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Detach a node. Removing an id that is not attached is a no-op.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Mesh)> {
        self.iter().filter_map(|(id, node)| node.as_mesh().map(|mesh| (id, mesh)))
    }

    pub fn lights(&self) -> impl Iterator<Item = (NodeId, &Light)> {
        self.iter().filter_map(|(id, node)| node.as_light().map(|light| (id, light)))
    }

    pub fn helpers(&self) -> impl Iterator<Item = (NodeId, &Helper)> {
        self.iter().filter_map(|(id, node)| node.as_helper().map(|helper| (id, helper)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

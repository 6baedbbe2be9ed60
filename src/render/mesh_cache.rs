use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::geometry::{Geometry, GeometryId};

pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    /// Line-list of unique triangle edges, built on first wireframe use
    pub edges: Option<(wgpu::Buffer, u32)>,
    last_used: u64,
}

/// Vertex and index buffers per geometry, dropped once a frame goes by
/// without the geometry being drawn
#[derive(Default)]
pub struct MeshCache {
    meshes: HashMap<GeometryId, GpuMesh>,
    frame: u64,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn prepare(&mut self, device: &wgpu::Device, geometry: &Geometry, edges: bool) {
        let frame = self.frame;
        let mesh = self.meshes.entry(geometry.id()).or_insert_with(|| upload(device, geometry));
        mesh.last_used = frame;

        if edges && mesh.edges.is_none() {
            let indices = geometry.edge_indices();
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Edge Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            mesh.edges = Some((buffer, indices.len() as u32));
        }
    }

    pub fn get(&self, id: GeometryId) -> Option<&GpuMesh> {
        self.meshes.get(&id)
    }

    /// Release buffers of geometry not prepared during the current frame
    pub fn evict_unused(&mut self) -> usize {
        let frame = self.frame;
        let before = self.meshes.len();
        self.meshes.retain(|_, mesh| mesh.last_used == frame);
        let evicted = before - self.meshes.len();
        if evicted > 0 {
            log::debug!("Evicted {evicted} mesh buffers");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

fn upload(device: &wgpu::Device, geometry: &Geometry) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(geometry.label()),
        contents: bytemuck::cast_slice(geometry.vertices()),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Index Buffer"),
        contents: bytemuck::cast_slice(geometry.indices()),
        usage: wgpu::BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: geometry.indices().len() as u32,
        edges: None,
        last_used: 0,
    }
}

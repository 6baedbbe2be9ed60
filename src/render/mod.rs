mod draw_list;
mod gpu_context;
mod mesh_cache;
mod renderer;
mod uniforms;

pub use draw_list::{DrawItem, DrawList, DrawTopology};
pub use gpu_context::GpuContext;
pub use mesh_cache::{GpuMesh, MeshCache};
pub use renderer::SceneRenderer;
pub use uniforms::{FrameUniform, ObjectUniform, OBJECT_STRIDE, SHADOW_MAP_SIZE};

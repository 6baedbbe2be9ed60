mod graph;
mod snapshot;
mod state;

pub use graph::{Mesh, Node, NodeId, Scene, BACKGROUND};
pub use snapshot::SceneSnapshot;
pub use state::{RendererSettings, SceneState, Viewport, AXES_SIZE, PLANE_SIZE, ROTATION_STEP};

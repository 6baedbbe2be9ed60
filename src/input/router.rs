use glam::Vec2;
use log::{debug, log_enabled, Level};

use super::{ControlChange, InputEvent, PointerEvent};
use crate::scene::SceneState;

/// Routes input events to the scene state holder
///
/// Also tracks the cursor so that button presses, which winit reports
/// without a position, can be placed.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    pub(super) cursor: Vec2,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn dispatch(&mut self, state: &mut SceneState, event: InputEvent) {
        let log_snapshot = !matches!(event, InputEvent::Pointer(_));
        match event {
            InputEvent::KeyDown(key) => {
                state.select_shape_key(&key);
            }
            InputEvent::Control(change) => Self::apply(state, change),
            InputEvent::Resize { width, height } => state.resize(width, height),
            InputEvent::Pointer(pointer) => Self::pointer(state, pointer),
        }

        if log_snapshot && log_enabled!(Level::Debug) {
            debug!("scene: {}", state.snapshot().to_json());
        }
    }

    fn apply(state: &mut SceneState, change: ControlChange) {
        match change {
            // The shape dropdown emits the same strings as the digit keys
            ControlChange::Shape(value) => {
                state.select_shape_key(&value);
            }
            ControlChange::Material(value) => {
                state.select_material(&value);
            }
            ControlChange::Camera(value) => {
                state.select_camera(&value);
            }
            ControlChange::Light(value) => {
                state.select_light(&value);
            }
            ControlChange::Shadow(enabled) => state.set_shadows(enabled),
        }
    }

    fn pointer(state: &mut SceneState, pointer: PointerEvent) {
        let height = state.viewport().height as f32;
        let rig = state.rig_mut();
        match pointer {
            PointerEvent::Down { button, position } => rig.controls.pointer_down(button, position),
            PointerEvent::Moved { position } => rig.controls.pointer_move(position, &rig.camera, height),
            PointerEvent::Up => rig.controls.pointer_up(),
            PointerEvent::Wheel { delta_y } => rig.controls.wheel(delta_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenePreset;
    use crate::scene::Viewport;
    use crate::shape::ShapeKind;

    #[test]
    fn test_key_down_selects_shape() {
        let mut state = SceneState::new(ScenePreset::PLAYGROUND, Viewport::new(640, 480));
        let mut router = InputRouter::new();
        router.dispatch(&mut state, InputEvent::KeyDown("9".into()));
        assert_eq!(state.shape(), Some(ShapeKind::Tetrahedron));
        router.dispatch(&mut state, InputEvent::KeyDown("Enter".into()));
        assert_eq!(state.shape(), Some(ShapeKind::Tetrahedron));
    }

    #[test]
    fn test_shape_dropdown_matches_keys() {
        let mut state = SceneState::new(ScenePreset::PLAYGROUND, Viewport::new(640, 480));
        let mut router = InputRouter::new();
        router.dispatch(&mut state, InputEvent::Control(ControlChange::Shape("0".into())));
        assert_eq!(state.shape(), Some(ShapeKind::Dodecahedron));
    }
}

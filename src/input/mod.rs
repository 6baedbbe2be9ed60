//! Host events in, scene mutations out. Keyboard keys drive the shape
//! factory, control changes drive their component, pointer events drive the
//! active view-control handler.

mod router;
mod winit_adapter;

use glam::Vec2;

pub use crate::controls::PointerButton;
pub use router::InputRouter;

/// Fixed identifiers of the change-emitting controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Shape,
    Material,
    Camera,
    Light,
    Shadow,
}

impl ControlId {
    pub const ALL: [ControlId; 5] = [
        ControlId::Shape,
        ControlId::Material,
        ControlId::Camera,
        ControlId::Light,
        ControlId::Shadow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::Shape => "shapeSelect",
            ControlId::Material => "materialSelect",
            ControlId::Camera => "cameraSelect",
            ControlId::Light => "lightSelect",
            ControlId::Shadow => "shadowToggle",
        }
    }
}

/// A "change" emitted by one of the controls, carrying its raw value
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Shape(String),
    Material(String),
    Camera(String),
    Light(String),
    Shadow(bool),
}

impl ControlChange {
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Shape(_) => ControlId::Shape,
            ControlChange::Material(_) => ControlId::Material,
            ControlChange::Camera(_) => ControlId::Camera,
            ControlChange::Light(_) => ControlId::Light,
            ControlChange::Shadow(_) => ControlId::Shadow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, position: Vec2 },
    Moved { position: Vec2 },
    Up,
    /// Positive values scroll towards the user
    Wheel { delta_y: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    Control(ControlChange),
    Resize { width: u32, height: u32 },
    Pointer(PointerEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_ids() {
        let ids: Vec<_> = ControlId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["shapeSelect", "materialSelect", "cameraSelect", "lightSelect", "shadowToggle"]);
    }

    #[test]
    fn test_change_maps_to_control() {
        assert_eq!(ControlChange::Shadow(true).control(), ControlId::Shadow);
        assert_eq!(ControlChange::Light("spot".into()).control(), ControlId::Light);
    }
}

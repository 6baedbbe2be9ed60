use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::Key;

use super::{InputEvent, InputRouter, PointerButton, PointerEvent};

/// Pixels per wheel line, used to normalize line and pixel scroll deltas
const LINE_HEIGHT: f32 = 40.0;

impl InputRouter {
    /// Adapt a winit window event; events with no meaning here yield `None`
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                key_text(&event.logical_key).map(InputEvent::KeyDown)
            }
            WindowEvent::Resized(size) => Some(InputEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::Pointer(PointerEvent::Moved { position: self.cursor }))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pointer = match state {
                    ElementState::Pressed => PointerEvent::Down {
                        button: pointer_button(*button)?,
                        position: self.cursor,
                    },
                    ElementState::Released => PointerEvent::Up,
                };
                Some(InputEvent::Pointer(pointer))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(position) => -position.y as f32,
                };
                Some(InputEvent::Pointer(PointerEvent::Wheel { delta_y }))
            }
            _ => None,
        }
    }
}

/// The key as a string: printed characters verbatim, named keys by name
pub(crate) fn key_text(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        Key::Named(named) => Some(format!("{named:?}")),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

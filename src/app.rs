use std::sync::Arc;

use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::config::AppConfig;
use crate::frame::{FpsCounter, FrameClock};
use crate::input::{InputEvent, InputRouter};
use crate::render::SceneRenderer;
use crate::scene::SceneState;
use crate::ui::ControlPanel;

pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    state: SceneState,
    router: InputRouter,
    panel: ControlPanel,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let state = SceneState::from_config(&config);
        let panel = ControlPanel::new(&state);
        Self {
            config,
            window: None,
            renderer: None,
            state,
            router: InputRouter::new(),
            panel,
            clock: FrameClock::new(),
            fps: FpsCounter::default(),
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        if let Some(frame) = self.clock.next() {
            if self.fps.tick(frame.delta) {
                log::debug!("FPS: {:.1}", self.fps.fps());
            }
        }
        self.state.tick();

        let fps = self.fps.fps();
        let panel = &mut self.panel;
        let mut changes = Vec::new();
        let mut show_panel = |ctx: &egui::Context| changes = panel.show(ctx, fps);
        let ui: Option<&mut dyn FnMut(&egui::Context)> = if self.config.show_ui {
            Some(&mut show_panel)
        } else {
            None
        };

        match renderer.render(&self.state, window, ui) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                renderer.resize(size.width, size.height);
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {e}"),
        }

        for change in changes {
            self.router.dispatch(&mut self.state, InputEvent::Control(change));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Scene Playground")
            .with_inner_size(winit::dpi::PhysicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(window.clone())) {
            Ok(renderer) => renderer,
            Err(e) => {
                error!("Failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = renderer.size();
        self.state.resize(width, height);
        info!("Keys 1-9 and 0 select shapes, Escape quits");

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if self.config.show_ui {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Named(NamedKey::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                if let WindowEvent::Resized(size) = event {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size.width, size.height);
                    }
                }
                if let Some(input) = self.router.translate(&event) {
                    let is_key = matches!(input, InputEvent::KeyDown(_));
                    self.router.dispatch(&mut self.state, input);
                    if is_key {
                        self.panel.sync_shape(&self.state);
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

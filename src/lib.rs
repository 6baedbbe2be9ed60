pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod frame;
pub mod geometry;
pub mod helper;
pub mod input;
pub mod light;
pub mod logging;
pub mod material;
pub mod math;
pub mod render;
pub mod scene;
pub mod shape;
pub mod ui;

pub use config::{AppConfig, HelperPolicy, ScenePreset};
pub use scene::{SceneSnapshot, SceneState, Viewport};

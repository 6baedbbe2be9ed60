// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresetArg {
    /// Meshes at y = 2, capsule length 2, shadows off
    #[default]
    Playground,
    /// Meshes at y = 1, capsule length 1, shadows on
    Simple,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-playground")]
#[command(about = "Interactive 3D scene playground", long_about = None)]
pub struct Cli {
    /// Startup scene parameters
    #[arg(long, value_enum, default_value_t = PresetArg::Playground)]
    pub preset: PresetArg,

    /// Start with shadow mapping enabled
    #[arg(long)]
    pub shadows: bool,

    /// Keep light helpers attached after their light is replaced
    #[arg(long = "keep-light-helpers")]
    pub keep_light_helpers: bool,

    /// Disable the control panel overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Log filter, same syntax as RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

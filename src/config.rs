use std::f32::consts::FRAC_PI_2;

use serde::Serialize;

use crate::cli::{Cli, PresetArg};

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

/// Startup parameters of the scene state holder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePreset {
    pub name: &'static str,
    /// Vertical offset given to every new mesh
    pub mesh_height: f32,
    pub capsule_length: f32,
    pub shadows: bool,
    /// Rotation of the ground plane about X
    pub plane_tilt: f32,
    pub plane_receives_shadow: bool,
}

impl ScenePreset {
    pub const PLAYGROUND: ScenePreset = ScenePreset {
        name: "playground",
        mesh_height: 2.0,
        capsule_length: 2.0,
        shadows: false,
        plane_tilt: -FRAC_PI_2,
        plane_receives_shadow: true,
    };

    pub const SIMPLE: ScenePreset = ScenePreset {
        name: "simple",
        mesh_height: 1.0,
        capsule_length: 1.0,
        shadows: true,
        plane_tilt: FRAC_PI_2,
        plane_receives_shadow: true,
    };
}

impl Default for ScenePreset {
    fn default() -> Self {
        Self::PLAYGROUND
    }
}

/// What happens to a light's helper when the light is replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelperPolicy {
    /// The helper is detached together with its light
    #[default]
    Replace,
    /// Helpers stay attached after their light is gone
    Accumulate,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub preset: ScenePreset,
    pub helper_policy: HelperPolicy,
    pub shadows: bool,
    pub show_ui: bool,
    pub width: u32,
    pub height: u32,
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset: ScenePreset::PLAYGROUND,
            helper_policy: HelperPolicy::Replace,
            shadows: ScenePreset::PLAYGROUND.shadows,
            show_ui: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            log_filter: None,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let preset = match cli.preset {
            PresetArg::Playground => ScenePreset::PLAYGROUND,
            PresetArg::Simple => ScenePreset::SIMPLE,
        };
        let helper_policy = if cli.keep_light_helpers {
            HelperPolicy::Accumulate
        } else {
            HelperPolicy::Replace
        };
        Self {
            preset,
            helper_policy,
            shadows: cli.shadows || preset.shadows,
            show_ui: !cli.no_ui,
            width: cli.width.max(1),
            height: cli.height.max(1),
            log_filter: cli.log,
        }
    }
}

//! egui control panel: one dropdown per selector plus the shadow checkbox.
//! Widgets hold their own values and report edits as `ControlChange`s.

use crate::camera::CameraMode;
use crate::input::{ControlChange, ControlId};
use crate::light::LightKind;
use crate::material::MaterialKind;
use crate::scene::SceneState;
use crate::shape::ShapeKind;

#[derive(Debug, Clone, PartialEq)]
pub struct PanelValues {
    pub shape: String,
    pub material: String,
    pub camera: String,
    pub light: Option<String>,
    pub shadows: bool,
}

impl PanelValues {
    /// Initial widget values matching a freshly built scene
    pub fn from_state(state: &SceneState) -> Self {
        Self {
            shape: state.shape().unwrap_or(ShapeKind::Box).key().to_string(),
            material: state.material_kind().name().to_string(),
            camera: state.camera().mode().name().to_string(),
            light: state.current_light().map(|light| light.kind().name().to_string()),
            shadows: state.shadows_enabled(),
        }
    }

    /// Changes from `previous` to `self`, in control order
    pub fn changes_since(&self, previous: &PanelValues) -> Vec<ControlChange> {
        let mut changes = Vec::new();
        if self.shape != previous.shape {
            changes.push(ControlChange::Shape(self.shape.clone()));
        }
        if self.material != previous.material {
            changes.push(ControlChange::Material(self.material.clone()));
        }
        if self.camera != previous.camera {
            changes.push(ControlChange::Camera(self.camera.clone()));
        }
        if self.light != previous.light {
            if let Some(light) = &self.light {
                changes.push(ControlChange::Light(light.clone()));
            }
        }
        if self.shadows != previous.shadows {
            changes.push(ControlChange::Shadow(self.shadows));
        }
        changes
    }
}

pub struct ControlPanel {
    values: PanelValues,
}

impl ControlPanel {
    pub fn new(state: &SceneState) -> Self {
        Self {
            values: PanelValues::from_state(state),
        }
    }

    pub fn values(&self) -> &PanelValues {
        &self.values
    }

    /// Keyboard shape selection bypasses the dropdown; keep it in sync
    pub fn sync_shape(&mut self, state: &SceneState) {
        if let Some(shape) = state.shape() {
            self.values.shape = shape.key().to_string();
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, fps: f32) -> Vec<ControlChange> {
        let previous = self.values.clone();
        let values = &mut self.values;

        egui::Window::new("Controls")
            .title_bar(true)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{fps:.0} FPS"))
                        .size(16.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.separator();

                egui::Grid::new("controls_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Shape");
                    let shape_label = ShapeKind::from_key(&values.shape).map_or("Box", ShapeKind::label);
                    egui::ComboBox::from_id_salt(ControlId::Shape.as_str())
                        .selected_text(shape_label)
                        .show_ui(ui, |ui| {
                            for kind in ShapeKind::ALL {
                                ui.selectable_value(&mut values.shape, kind.key().to_string(), kind.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Material");
                    egui::ComboBox::from_id_salt(ControlId::Material.as_str())
                        .selected_text(values.material.as_str())
                        .show_ui(ui, |ui| {
                            for kind in MaterialKind::ALL {
                                ui.selectable_value(&mut values.material, kind.name().to_string(), kind.name());
                            }
                        });
                    ui.end_row();

                    ui.label("Camera");
                    egui::ComboBox::from_id_salt(ControlId::Camera.as_str())
                        .selected_text(CameraMode::from_selector(&values.camera).label())
                        .show_ui(ui, |ui| {
                            for mode in CameraMode::ALL {
                                ui.selectable_value(&mut values.camera, mode.name().to_string(), mode.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Light");
                    let light_label = values
                        .light
                        .as_deref()
                        .map_or("None", |value| LightKind::from_selector(value).label());
                    egui::ComboBox::from_id_salt(ControlId::Light.as_str())
                        .selected_text(light_label)
                        .show_ui(ui, |ui| {
                            for kind in LightKind::ALL {
                                ui.selectable_value(&mut values.light, Some(kind.name().to_string()), kind.label());
                            }
                        });
                    ui.end_row();
                });

                ui.separator();
                ui.checkbox(&mut values.shadows, "Shadows");
                ui.label(egui::RichText::new("Keys 1-9, 0: shapes").color(egui::Color32::GRAY));
            });

        self.values.changes_since(&previous)
    }
}

//! Route table: what the central panel shows for each location.

use eframe::egui;
use navigation::{ActionId, NavigationView};
use shared::NavigationError;

const ACTION_BUTTON_SIZE: [f32; 2] = [180.0, 32.0];

/// Draws the routed screen and its navigation actions. Returns the action
/// clicked this frame, if any.
pub fn show_screen(ui: &mut egui::Ui, view: &NavigationView) -> Option<ActionId> {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new(view.location.title()).size(28.0).strong());
        ui.weak(view.location.path());
        ui.add_space(16.0);
        show_actions(ui, view)
    })
    .inner
}

fn show_actions(ui: &mut egui::Ui, view: &NavigationView) -> Option<ActionId> {
    let mut clicked = None;
    for action in view.actions() {
        let response = ui
            .push_id(action.id.as_str(), |ui| {
                ui.add_sized(ACTION_BUTTON_SIZE, egui::Button::new(action.label.as_str()))
            })
            .inner
            .on_hover_text(action.id.as_str());
        if response.clicked() {
            clicked = Some(action.id);
        }
    }
    clicked
}

/// Shown instead of a screen when the history holds a path with no route.
/// Returns true when the user asks to go back to the root screen.
pub fn show_unknown_route(ui: &mut egui::Ui, err: &NavigationError) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("No screen for this address");
        let error_color = ui.visuals().error_fg_color;
        ui.colored_label(error_color, err.to_string());
        ui.add_space(16.0);
        ui.add_sized(ACTION_BUTTON_SIZE, egui::Button::new("Back to Screen 0"))
            .clicked()
    })
    .inner
}

use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use navigation::{ActionId, MemoryHistory, NavigationController, NavigationView, Router};
use serde::{Deserialize, Serialize};
use shared::{Location, NavigationError};

use crate::config::Settings;
use crate::controller::orchestration::{dispatch_navigation_command, drain_navigation_commands};
use crate::router_bridge::{commands::NavigationCommand, queued_router::QueuedRouter};
use crate::ui::screens;

pub const SETTINGS_STORAGE_KEY: &str = "screens_gui_state";
const COMMAND_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial_path: String,
    pub restore_last_location: bool,
}

impl From<&Settings> for StartupConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            initial_path: settings.initial_path.clone(),
            restore_last_location: settings.restore_last_location,
        }
    }
}

impl StartupConfig {
    /// Persisted path if restoring is enabled and it still has a screen,
    /// otherwise the configured initial path.
    pub fn resolve_initial_path(&self, persisted: Option<&PersistedScreenState>) -> String {
        if self.restore_last_location {
            if let Some(path) = persisted.and_then(|state| state.last_path.as_deref()) {
                if Location::from_path(path).is_ok() {
                    return path.to_string();
                }
                tracing::warn!(path, "discarding persisted path without a screen");
            }
        }
        self.initial_path.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedScreenState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_path: Option<String>,
}

pub struct ScreensApp {
    history: MemoryHistory,
    cmd_tx: Sender<NavigationCommand>,
    cmd_rx: Receiver<NavigationCommand>,
    address: String,
    status: String,
}

impl ScreensApp {
    pub fn new(startup: &StartupConfig, persisted: Option<PersistedScreenState>) -> Self {
        let initial_path = startup.resolve_initial_path(persisted.as_ref());
        tracing::info!(path = %initial_path, "starting screen cycle");

        let (cmd_tx, cmd_rx) = bounded(COMMAND_QUEUE_CAPACITY);
        Self {
            address: initial_path.clone(),
            history: MemoryHistory::new(initial_path),
            cmd_tx,
            cmd_rx,
            status: String::new(),
        }
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn persisted_state(&self) -> PersistedScreenState {
        PersistedScreenState {
            last_path: self
                .history
                .current_location()
                .ok()
                .map(|location| location.path().to_string()),
        }
    }

    fn process_navigation_commands(&mut self) -> usize {
        let applied = drain_navigation_commands(&self.cmd_rx, &mut self.history);
        if applied > 0 {
            self.address = self.history.current_path().to_string();
            self.status.clear();
        }
        applied
    }

    fn queue(&mut self, cmd: NavigationCommand) {
        dispatch_navigation_command(&self.cmd_tx, cmd, &mut self.status);
    }

    pub fn render_view(&mut self) -> Result<NavigationView, NavigationError> {
        let controller =
            NavigationController::new(QueuedRouter::new(&self.history, &self.cmd_tx, &mut self.status));
        controller.render()
    }

    pub fn trigger_action(&mut self, view: &NavigationView, id: ActionId) {
        let result = {
            let mut controller = NavigationController::new(QueuedRouter::new(
                &self.history,
                &self.cmd_tx,
                &mut self.status,
            ));
            controller.trigger(view, id)
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "ignored navigation action");
            self.status = err.to_string();
        }
    }

    fn show_navigation_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let can_go_back = self.history.len() > 1;
            if ui.add_enabled(can_go_back, egui::Button::new("Back")).clicked() {
                self.queue(NavigationCommand::Back);
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.address)
                    .desired_width(160.0)
                    .hint_text("/"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let go = ui.button("Go").clicked();
            if submitted || go {
                let path = self.address.clone();
                self.queue(NavigationCommand::Open(path));
            }
        });

        if !self.status.is_empty() {
            let warn_color = ui.visuals().warn_fg_color;
            ui.colored_label(warn_color, self.status.as_str());
        }
    }

    fn show_routed_screen(&mut self, ui: &mut egui::Ui) {
        match self.render_view() {
            Ok(view) => {
                if let Some(id) = screens::show_screen(ui, &view) {
                    self.trigger_action(&view, id);
                }
            }
            Err(err) => {
                if screens::show_unknown_route(ui, &err) {
                    self.queue(NavigationCommand::Navigate(Location::Root));
                }
            }
        }
    }

    /// Draws one frame. Requests queued during the frame are applied at the
    /// start of the next one.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.process_navigation_commands();

        egui::TopBottomPanel::top("navigation_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_navigation_bar(ui);
            ui.add_space(4.0);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_routed_screen(ui);
        });

        if !self.cmd_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ScreensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.persisted_state()) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;

mod config;
mod controller;
mod router_bridge;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::ui::{PersistedScreenState, ScreensApp, StartupConfig, SETTINGS_STORAGE_KEY};

/// Storage namespace; kept fixed so a custom window title keeps its saved state.
const APP_ID: &str = "screens-gui";

#[derive(Parser, Debug, Default)]
#[command(about = "Three-screen navigation demo")]
struct Args {
    /// Path to open on launch. Implies --no-restore.
    #[arg(long)]
    initial_path: Option<String>,
    #[arg(long)]
    window_title: Option<String>,
    /// Start on the initial path instead of the last visited screen.
    #[arg(long)]
    no_restore: bool,
}

fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(path) = &args.initial_path {
        settings.initial_path = path.clone();
        settings.restore_last_location = false;
    }
    if let Some(title) = &args.window_title {
        settings.window_title = title.clone();
    }
    if args.no_restore {
        settings.restore_last_location = false;
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    apply_args(&mut settings, &args);
    tracing::info!(?settings, "loaded settings");
    let startup = StartupConfig::from(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.as_str())
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedScreenState>(&text).ok())
            });
            Ok(Box::new(ScreensApp::new(&startup, persisted)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::{apply_args, Args};
    use crate::config::Settings;
    use clap::Parser;

    #[test]
    fn explicit_initial_path_disables_restore() {
        let mut settings = Settings::default();
        let args = Args::try_parse_from(["screens-gui", "--initial-path", "/2"]).expect("args");
        apply_args(&mut settings, &args);

        assert_eq!(settings.initial_path, "/2");
        assert!(!settings.restore_last_location);
    }

    #[test]
    fn no_flags_keep_loaded_settings() {
        let mut settings = Settings {
            initial_path: "/1".into(),
            window_title: "Cycle".into(),
            restore_last_location: true,
        };
        apply_args(&mut settings, &Args::default());

        assert_eq!(settings.initial_path, "/1");
        assert_eq!(settings.window_title, "Cycle");
        assert!(settings.restore_last_location);
    }

    #[test]
    fn no_restore_flag_wins_over_settings() {
        let mut settings = Settings::default();
        let args = Args::try_parse_from(["screens-gui", "--no-restore", "--window-title", "Demo"])
            .expect("args");
        apply_args(&mut settings, &args);

        assert!(!settings.restore_last_location);
        assert_eq!(settings.window_title, "Demo");
        assert_eq!(settings.initial_path, "/");
    }
}

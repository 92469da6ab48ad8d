use std::{collections::HashMap, fs, path::Path};

use shared::route::ROOT_PATH;

pub const SETTINGS_FILE: &str = "screens.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_path: String,
    pub window_title: String,
    pub restore_last_location: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_path: ROOT_PATH.into(),
            window_title: "Screen Cycle".into(),
            restore_last_location: true,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then `screens.toml`, then `APP__*` environment variables.
///
/// Unreadable files and unparsable values are skipped, leaving the previous
/// layer in place.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file_values(&mut settings, &file_cfg),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings file"),
        }
    }

    if let Some(v) = env("APP__INITIAL_PATH") {
        settings.initial_path = v;
    }
    if let Some(v) = env("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = env("APP__RESTORE_LAST_LOCATION") {
        if let Some(parsed) = parse_flag(&v) {
            settings.restore_last_location = parsed;
        }
    }

    settings
}

fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("initial_path").and_then(toml::Value::as_str) {
        settings.initial_path = v.to_string();
    }
    if let Some(v) = file_cfg.get("window_title").and_then(toml::Value::as_str) {
        settings.window_title = v.to_string();
    }
    match file_cfg.get("restore_last_location") {
        Some(toml::Value::Boolean(v)) => settings.restore_last_location = *v,
        Some(toml::Value::String(v)) => {
            if let Some(parsed) = parse_flag(v) {
                settings.restore_last_location = parsed;
            }
        }
        _ => {}
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

//! UI layer for the desktop shell: app frame, navigation bar, and routed screens.

pub mod app;
pub mod screens;

pub use app::{PersistedScreenState, ScreensApp, StartupConfig, SETTINGS_STORAGE_KEY};

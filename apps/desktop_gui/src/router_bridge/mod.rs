//! Bridge between the navigation controller and the app-owned history.

pub mod commands;
pub mod queued_router;

use thiserror::Error;

use crate::domain::Location;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The router handed back a path that has no screen. This is a routing bug,
    /// never a state the controller papers over.
    #[error("unknown route path '{path}'")]
    UnknownPath { path: String },
    #[error("action '{action}' is not available on {location:?}")]
    ActionUnavailable {
        action: &'static str,
        location: Location,
    },
}

impl NavigationError {
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath { path: path.into() }
    }
}

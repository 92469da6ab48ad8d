//! In-memory browser-style history used as the default router.

use shared::{route::ROOT_PATH, Location, NavigationError};

use crate::Router;

/// Stack of visited paths; the top entry is the current one.
///
/// Entries are raw paths, so a typed-in path without a screen can sit on the
/// stack. Reading it through [`Router::current_location`] reports the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
        }
    }

    pub fn at(location: Location) -> Self {
        Self::new(location.path())
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Pops the current entry. The first entry is never popped.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn current_path(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or(ROOT_PATH)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::at(Location::Root)
    }
}

impl Router for MemoryHistory {
    fn current_location(&self) -> Result<Location, NavigationError> {
        Location::from_path(self.current_path())
    }

    fn navigate_to(&mut self, location: Location) {
        self.push(location.path());
    }
}

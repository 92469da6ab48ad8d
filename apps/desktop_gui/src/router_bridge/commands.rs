//! Navigation commands queued from the UI to the history owner.

use shared::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Push a screen, as requested by a controller action.
    Navigate(Location),
    /// Push a raw path typed into the address bar. It may have no screen.
    Open(String),
    Back,
}

impl NavigationCommand {
    pub fn name(&self) -> &'static str {
        match self {
            NavigationCommand::Navigate(_) => "navigate",
            NavigationCommand::Open(_) => "open",
            NavigationCommand::Back => "back",
        }
    }
}

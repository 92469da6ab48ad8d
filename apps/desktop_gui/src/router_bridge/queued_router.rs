//! Router handed to the controller while a frame is drawn.

use crossbeam_channel::Sender;
use navigation::{MemoryHistory, Router};
use shared::{Location, NavigationError};

use crate::controller::orchestration::dispatch_navigation_command;
use crate::router_bridge::commands::NavigationCommand;

/// Reads from the history as it was at frame start and queues navigation
/// requests. The history only changes when the app drains the queue, so every
/// read within one frame sees the same location.
pub struct QueuedRouter<'a> {
    history: &'a MemoryHistory,
    cmd_tx: &'a Sender<NavigationCommand>,
    status: &'a mut String,
}

impl<'a> QueuedRouter<'a> {
    pub fn new(
        history: &'a MemoryHistory,
        cmd_tx: &'a Sender<NavigationCommand>,
        status: &'a mut String,
    ) -> Self {
        Self {
            history,
            cmd_tx,
            status,
        }
    }
}

impl Router for QueuedRouter<'_> {
    fn current_location(&self) -> Result<Location, NavigationError> {
        self.history.current_location()
    }

    fn navigate_to(&mut self, location: Location) {
        dispatch_navigation_command(
            self.cmd_tx,
            NavigationCommand::Navigate(location),
            self.status,
        );
    }
}

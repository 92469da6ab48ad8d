//! Command orchestration from UI actions to the navigation command queue.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use navigation::MemoryHistory;

use crate::router_bridge::commands::NavigationCommand;

pub fn dispatch_navigation_command(
    cmd_tx: &Sender<NavigationCommand>,
    cmd: NavigationCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->history command"),
        Err(TrySendError::Full(_)) => {
            *status = "Navigation queue is full; please retry".to_string();
            tracing::warn!(command = cmd_name, "navigation queue full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Navigation queue disconnected; restart the app".to_string();
            tracing::warn!(command = cmd_name, "navigation queue disconnected");
        }
    }
}

pub fn apply_navigation_command(history: &mut MemoryHistory, cmd: NavigationCommand) {
    match cmd {
        NavigationCommand::Navigate(location) => history.push(location.path()),
        NavigationCommand::Open(path) => history.push(path.trim()),
        NavigationCommand::Back => {
            if !history.back() {
                tracing::debug!("already at the first history entry");
            }
        }
    }
}

/// Applies every queued command in order. Returns how many were applied.
pub fn drain_navigation_commands(
    cmd_rx: &Receiver<NavigationCommand>,
    history: &mut MemoryHistory,
) -> usize {
    let mut applied = 0;
    while let Ok(cmd) = cmd_rx.try_recv() {
        apply_navigation_command(history, cmd);
        applied += 1;
    }
    if applied > 0 {
        tracing::debug!(applied, path = history.current_path(), "history updated");
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::Location;

    #[test]
    fn queued_commands_apply_in_order() {
        let (tx, rx) = bounded(8);
        let mut status = String::new();
        dispatch_navigation_command(&tx, NavigationCommand::Navigate(Location::ScreenB), &mut status);
        dispatch_navigation_command(&tx, NavigationCommand::Open(" /9 ".into()), &mut status);
        dispatch_navigation_command(&tx, NavigationCommand::Back, &mut status);

        let mut history = MemoryHistory::default();
        assert_eq!(drain_navigation_commands(&rx, &mut history), 3);
        assert_eq!(history.entries(), ["/", "/2"]);
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_reports_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_navigation_command(&tx, NavigationCommand::Back, &mut status);
        dispatch_navigation_command(&tx, NavigationCommand::Back, &mut status);
        assert_eq!(status, "Navigation queue is full; please retry");
    }

    #[test]
    fn disconnected_queue_reports_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        dispatch_navigation_command(&tx, NavigationCommand::Navigate(Location::Root), &mut status);
        assert!(status.contains("disconnected"), "{status}");
    }

    #[test]
    fn back_on_first_entry_is_a_no_op() {
        let mut history = MemoryHistory::at(Location::ScreenA);
        apply_navigation_command(&mut history, NavigationCommand::Back);
        assert_eq!(history.entries(), ["/1"]);
    }
}

//! Navigation controller for the three-screen cycle.
//!
//! The controller owns no state. Every render reads the active [`Location`]
//! through an injected [`Router`] and derives the actions to show from it;
//! triggering an action pushes one navigation request back into the router.

use serde::Serialize;
use shared::{Location, NavigationError, NavigationIntent};
use tracing::{debug, warn};

pub mod history;

pub use history::MemoryHistory;

const HOME_LABEL: &str = "Home";

/// Capability the controller needs from whatever owns the current location.
pub trait Router {
    /// Reads the active location. Must be stable between navigations.
    fn current_location(&self) -> Result<Location, NavigationError>;

    /// Requests a transition. Fire-and-forget: the controller never waits on
    /// or inspects the outcome.
    fn navigate_to(&mut self, location: Location);
}

impl<R: Router + ?Sized> Router for &mut R {
    fn current_location(&self) -> Result<Location, NavigationError> {
        (**self).current_location()
    }

    fn navigate_to(&mut self, location: Location) {
        (**self).navigate_to(location);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionId {
    #[serde(rename = "next-screen-action")]
    NextScreen,
    #[serde(rename = "home-action")]
    Home,
}

impl ActionId {
    pub const ALL: [ActionId; 2] = [ActionId::NextScreen, ActionId::Home];

    /// Stable identifier used by automation and by the console `--press` flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionId::NextScreen => "next-screen-action",
            ActionId::Home => "home-action",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: ActionId,
    pub label: String,
    pub target: Location,
}

impl Action {
    fn next_screen(target: Location) -> Self {
        Self {
            id: ActionId::NextScreen,
            label: format!("Go to Screen {}", target.screen_number()),
            target,
        }
    }

    fn home() -> Self {
        Self {
            id: ActionId::Home,
            label: HOME_LABEL.to_string(),
            target: Location::Root,
        }
    }
}

/// What the controller shows for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    pub location: Location,
    pub primary: Action,
    pub home: Option<Action>,
}

impl NavigationView {
    pub fn for_location(location: Location) -> Self {
        let home = match location {
            Location::Root => None,
            Location::ScreenA | Location::ScreenB => Some(Action::home()),
        };

        Self {
            location,
            primary: Action::next_screen(primary_target(location)),
            home,
        }
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        match id {
            ActionId::NextScreen => Some(&self.primary),
            ActionId::Home => self.home.as_ref(),
        }
    }

    /// Rendered actions in display order: primary first, then home.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        std::iter::once(&self.primary).chain(self.home.as_ref())
    }
}

pub fn primary_target(location: Location) -> Location {
    NavigationIntent::from_location(location).target()
}

pub struct NavigationController<R> {
    router: R,
}

impl<R: Router> NavigationController<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_router(self) -> R {
        self.router
    }

    pub fn render(&self) -> Result<NavigationView, NavigationError> {
        let location = self.router.current_location().inspect_err(|err| {
            warn!(error = %err, "router supplied a location without a screen");
        })?;
        Ok(NavigationView::for_location(location))
    }

    /// Activates `id` as it was rendered in `view`.
    ///
    /// Targets come from the view, not from a fresh router read, so the request
    /// always matches what the user saw on the button.
    pub fn trigger(
        &mut self,
        view: &NavigationView,
        id: ActionId,
    ) -> Result<Location, NavigationError> {
        let Some(action) = view.action(id) else {
            return Err(NavigationError::ActionUnavailable {
                action: id.as_str(),
                location: view.location,
            });
        };

        debug!(
            action = id.as_str(),
            from = %view.location,
            to = %action.target,
            "requesting navigation"
        );
        self.router.navigate_to(action.target);
        Ok(action.target)
    }

    /// Renders against the current location and triggers `id` on the result.
    pub fn render_and_trigger(&mut self, id: ActionId) -> Result<Location, NavigationError> {
        let view = self.render()?;
        self.trigger(&view, id)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// The active screen, as owned by whichever router is in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Root,
    ScreenA,
    ScreenB,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Root, Location::ScreenA, Location::ScreenB];

    /// Number shown in screen titles and action labels.
    pub fn screen_number(self) -> u8 {
        match self {
            Location::Root => 0,
            Location::ScreenA => 1,
            Location::ScreenB => 2,
        }
    }

    pub fn title(self) -> String {
        format!("Screen {}", self.screen_number())
    }

    pub fn is_root(self) -> bool {
        self == Location::Root
    }
}

/// Where the primary action of the current screen leads.
///
/// Computed on every render from the active [`Location`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    GoToA,
    GoToB,
}

impl NavigationIntent {
    pub fn from_location(location: Location) -> Self {
        match location {
            Location::Root | Location::ScreenA => NavigationIntent::GoToB,
            Location::ScreenB => NavigationIntent::GoToA,
        }
    }

    pub fn target(self) -> Location {
        match self {
            NavigationIntent::GoToA => Location::ScreenA,
            NavigationIntent::GoToB => Location::ScreenB,
        }
    }
}

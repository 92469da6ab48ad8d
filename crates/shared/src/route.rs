//! Path routing: the only place where screens are spelled as strings.

use std::{fmt, str::FromStr};

use crate::{domain::Location, error::NavigationError};

pub const ROOT_PATH: &str = "/";
pub const SCREEN_A_PATH: &str = "/1";
pub const SCREEN_B_PATH: &str = "/2";

impl Location {
    pub fn path(self) -> &'static str {
        match self {
            Location::Root => ROOT_PATH,
            Location::ScreenA => SCREEN_A_PATH,
            Location::ScreenB => SCREEN_B_PATH,
        }
    }

    /// Resolves a router path. A single trailing slash after a screen path is
    /// ignored, so `/1/` lands on the same screen as `/1`. Nothing else is
    /// normalized.
    pub fn from_path(path: &str) -> Result<Self, NavigationError> {
        let normalized = match path.strip_suffix('/') {
            Some(rest) if rest == SCREEN_A_PATH || rest == SCREEN_B_PATH => rest,
            _ => path,
        };

        match normalized {
            ROOT_PATH => Ok(Location::Root),
            SCREEN_A_PATH => Ok(Location::ScreenA),
            SCREEN_B_PATH => Ok(Location::ScreenB),
            _ => Err(NavigationError::unknown_path(path)),
        }
    }
}

impl FromStr for Location {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::from_path(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

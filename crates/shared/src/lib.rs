//! Domain types shared by the navigation core and the app shells.

pub mod domain;
pub mod error;
pub mod route;

pub use domain::{Location, NavigationIntent};
pub use error::NavigationError;

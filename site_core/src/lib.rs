//! Framework-free core of the Basel UI documentation site.
//!
//! Holds the two mechanisms every part of the site agrees on: the light/dark
//! theme store with its subscriber registry, and the static route table with
//! the router that drives view activation. Nothing in here touches the DOM,
//! so all of it is testable on the host.

pub mod config;
pub mod router;
pub mod routing;
pub mod theme;

pub use config::{ConfigError, SiteMeta};
pub use router::{NavigationError, Router, View};
pub use routing::{Resolution, RouteConfigError, RouteError, RouteNode, RouteTable, ViewId};
pub use theme::{PersistenceError, SubscriptionHandle, ThemeFlag, ThemePersistence, ThemeStore};

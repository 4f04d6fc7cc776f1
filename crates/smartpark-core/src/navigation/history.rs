//! Navigation history as exposed by the host navigation stack.

use super::screen::{RouteRegistry, Screen};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One visited route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RouteRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
        }
    }
}

/// The screen a scan was started from, as far as the scan flow cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginScreen {
    MapDashboardDrawer,
    BookingDetails,
    MyBookingList,
    /// No recognised origin in the history.
    Unknown,
}

/// Ordered route records, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationHistory {
    routes: Vec<RouteRecord>,
}

impl NavigationHistory {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(RouteRecord::named).collect())
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn contains(&self, registry: &RouteRegistry, screen: Screen) -> bool {
        self.routes
            .iter()
            .any(|route| registry.screen_for(&route.name) == Some(screen))
    }

    /// Resolves the scan origin: the most recent route that is one of the
    /// three origin screens wins, everything else is skipped.
    pub fn origin(&self, registry: &RouteRegistry) -> OriginScreen {
        self.routes
            .iter()
            .rev()
            .find_map(|route| match registry.screen_for(&route.name)? {
                Screen::MapDashboardDrawer => Some(OriginScreen::MapDashboardDrawer),
                Screen::BookingDetails => Some(OriginScreen::BookingDetails),
                Screen::MyBookingList => Some(OriginScreen::MyBookingList),
                _ => None,
            })
            .unwrap_or(OriginScreen::Unknown)
    }
}

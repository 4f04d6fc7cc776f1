//! Screens and the route-name registry.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Every screen the booking flows navigate to or inspect in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    MapDashboard,
    MapDashboardDrawer,
    BookingDetails,
    MyBookingList,
    ScanQr,
    ParkingAreaDetail,
    BookingConfirm,
    BookingSuccess,
    SelectPaymentMethod,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::MapDashboard,
        Screen::MapDashboardDrawer,
        Screen::BookingDetails,
        Screen::MyBookingList,
        Screen::ScanQr,
        Screen::ParkingAreaDetail,
        Screen::BookingConfirm,
        Screen::BookingSuccess,
        Screen::SelectPaymentMethod,
    ];

    /// Route name registered by the app for this screen.
    pub fn default_route_name(self) -> &'static str {
        match self {
            Screen::MapDashboard => "MapDashboard",
            Screen::MapDashboardDrawer => "SmartParkingMapDrawer",
            Screen::BookingDetails => "SmartParkingBookingDetails",
            Screen::MyBookingList => "MyBookingList",
            Screen::ScanQr => "SmartParkingScanQR",
            Screen::ParkingAreaDetail => "SmartParkingParkingAreaDetail",
            Screen::BookingConfirm => "SmartParkingBookingConfirm",
            Screen::BookingSuccess => "SmartParkingBookingSuccess",
            Screen::SelectPaymentMethod => "SmartParkingSelectPaymentMethod",
        }
    }
}

/// Maps screens to the route names of the host navigation stack and back.
///
/// Overrides replace the default name of a screen; aliases let extra names
/// (e.g. routes kept around from older releases) resolve to a screen without
/// changing the name used when navigating.
///
/// Configured aliases are added to the built-in ones; an entry with the same
/// name replaces the built-in target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRegistry {
    pub overrides: BTreeMap<Screen, String>,
    #[serde(deserialize_with = "with_builtin_aliases")]
    pub aliases: BTreeMap<String, Screen>,
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            aliases: builtin_aliases(),
        }
    }
}

fn builtin_aliases() -> BTreeMap<String, Screen> {
    let mut aliases = BTreeMap::new();
    aliases.insert("BookingDetail".to_string(), Screen::BookingDetails);
    aliases
}

fn with_builtin_aliases<'de, D>(deserializer: D) -> Result<BTreeMap<String, Screen>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut aliases = builtin_aliases();
    aliases.extend(BTreeMap::<String, Screen>::deserialize(deserializer)?);
    Ok(aliases)
}

impl RouteRegistry {
    pub fn route_name(&self, screen: Screen) -> &str {
        self.overrides
            .get(&screen)
            .map(String::as_str)
            .unwrap_or_else(|| screen.default_route_name())
    }

    /// Resolves a route name from the navigation history.
    pub fn screen_for(&self, route_name: &str) -> Option<Screen> {
        Screen::ALL
            .into_iter()
            .find(|screen| self.route_name(*screen) == route_name)
            .or_else(|| self.aliases.get(route_name).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_round_trip() {
        let registry = RouteRegistry::default();
        for screen in Screen::ALL {
            assert_eq!(registry.screen_for(registry.route_name(screen)), Some(screen));
        }
    }

    #[test]
    fn test_alias_resolves_to_screen() {
        let registry = RouteRegistry::default();
        assert_eq!(registry.screen_for("BookingDetail"), Some(Screen::BookingDetails));
        assert_eq!(
            registry.route_name(Screen::BookingDetails),
            "SmartParkingBookingDetails"
        );
    }

    #[test]
    fn test_override_replaces_default() {
        let mut registry = RouteRegistry::default();
        registry
            .overrides
            .insert(Screen::MapDashboard, "Dashboard".to_string());
        assert_eq!(registry.route_name(Screen::MapDashboard), "Dashboard");
        assert_eq!(registry.screen_for("Dashboard"), Some(Screen::MapDashboard));
        assert_eq!(registry.screen_for("MapDashboard"), None);
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(RouteRegistry::default().screen_for("route 1"), None);
    }
}

//! Navigation instructions handed to the host navigation stack.

use super::screen::{RouteRegistry, Screen};
use crate::scan::Identifier;
use serde_json::{Map, Value, json};

/// Where to go next, with the params the target screen expects.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationInstruction {
    /// Pop the current screen.
    GoBack,
    MapDashboard {
        scan_data_response: Value,
    },
    BookingDetails {
        scan_data_response: Value,
        id: Option<Identifier>,
    },
    MyBookingList {
        scan_data_response: Value,
    },
    ParkingAreaDetail {
        id: Option<Identifier>,
        spot_id: Option<Identifier>,
    },
    /// Pick a card, then come back to `route_name` with `route_data`.
    SelectPaymentMethod {
        route_name: Screen,
        route_data: Value,
    },
}

impl NavigationInstruction {
    /// Target screen, `None` for [`NavigationInstruction::GoBack`].
    pub fn target(&self) -> Option<Screen> {
        match self {
            NavigationInstruction::GoBack => None,
            NavigationInstruction::MapDashboard { .. } => Some(Screen::MapDashboard),
            NavigationInstruction::BookingDetails { .. } => Some(Screen::BookingDetails),
            NavigationInstruction::MyBookingList { .. } => Some(Screen::MyBookingList),
            NavigationInstruction::ParkingAreaDetail { .. } => Some(Screen::ParkingAreaDetail),
            NavigationInstruction::SelectPaymentMethod { .. } => {
                Some(Screen::SelectPaymentMethod)
            }
        }
    }

    pub fn is_go_back(&self) -> bool {
        matches!(self, NavigationInstruction::GoBack)
    }

    /// Params object in the key layout the target screen reads.
    pub fn params(&self, registry: &RouteRegistry) -> Value {
        let mut params = Map::new();
        match self {
            NavigationInstruction::GoBack => {}
            NavigationInstruction::MapDashboard { scan_data_response }
            | NavigationInstruction::MyBookingList { scan_data_response } => {
                params.insert("scanDataResponse".into(), scan_data_response.clone());
            }
            NavigationInstruction::BookingDetails {
                scan_data_response,
                id,
            } => {
                params.insert("scanDataResponse".into(), scan_data_response.clone());
                insert_present(&mut params, "id", id);
            }
            NavigationInstruction::ParkingAreaDetail { id, spot_id } => {
                insert_present(&mut params, "id", id);
                insert_present(&mut params, "spot_id", spot_id);
            }
            NavigationInstruction::SelectPaymentMethod {
                route_name,
                route_data,
            } => {
                params.insert(
                    "routeName".into(),
                    Value::String(registry.route_name(*route_name).to_string()),
                );
                params.insert("routeData".into(), route_data.clone());
            }
        }
        Value::Object(params)
    }

    /// `(route name, params)` for a `navigate` call; `None` means go back.
    pub fn to_route(&self, registry: &RouteRegistry) -> Option<(String, Value)> {
        self.target()
            .map(|screen| (registry.route_name(screen).to_string(), self.params(registry)))
    }
}

/// Missing identifiers are left out rather than sent as `null`.
fn insert_present(params: &mut Map<String, Value>, key: &str, id: &Option<Identifier>) {
    if let Some(id) = id {
        params.insert(key.into(), json!(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_back_has_no_route() {
        let registry = RouteRegistry::default();
        assert!(NavigationInstruction::GoBack.is_go_back());
        assert_eq!(NavigationInstruction::GoBack.to_route(&registry), None);
    }

    #[test]
    fn test_booking_details_params() {
        let registry = RouteRegistry::default();
        let data = json!({"status": "booking_activated", "booking": {"id": 1}});
        let instruction = NavigationInstruction::BookingDetails {
            scan_data_response: data.clone(),
            id: Some(Identifier::Number(1)),
        };
        let (name, params) = instruction.to_route(&registry).unwrap();
        assert_eq!(name, "SmartParkingBookingDetails");
        assert_eq!(params, json!({"scanDataResponse": data, "id": 1}));
    }

    #[test]
    fn test_parking_area_params() {
        let registry = RouteRegistry::default();
        let instruction = NavigationInstruction::ParkingAreaDetail {
            id: Some(Identifier::Number(1)),
            spot_id: Some(Identifier::Number(2)),
        };
        let (name, params) = instruction.to_route(&registry).unwrap();
        assert_eq!(name, "SmartParkingParkingAreaDetail");
        assert_eq!(params, json!({"id": 1, "spot_id": 2}));
    }

    #[test]
    fn test_missing_ids_are_left_out_of_params() {
        let registry = RouteRegistry::default();
        let details = NavigationInstruction::BookingDetails {
            scan_data_response: json!({"status": "booking_activated"}),
            id: None,
        };
        assert_eq!(
            details.params(&registry),
            json!({"scanDataResponse": {"status": "booking_activated"}})
        );

        let area = NavigationInstruction::ParkingAreaDetail {
            id: Some(Identifier::Number(1)),
            spot_id: None,
        };
        assert_eq!(area.params(&registry), json!({"id": 1}));
    }

    #[test]
    fn test_select_payment_method_params() {
        let registry = RouteRegistry::default();
        let instruction = NavigationInstruction::SelectPaymentMethod {
            route_name: Screen::BookingDetails,
            route_data: json!({"id": 1}),
        };
        assert_eq!(
            instruction.params(&registry),
            json!({"routeName": "SmartParkingBookingDetails", "routeData": {"id": 1}})
        );
    }
}

//! Navigation domain module.
//!
//! # Module Structure
//!
//! - `screen`: screen identifiers and the route-name registry
//! - `history`: visited routes and origin-screen resolution
//! - `instruction`: the output of the scan and booking flows

mod history;
mod instruction;
mod screen;

pub use history::{NavigationHistory, OriginScreen, RouteRecord};
pub use instruction::NavigationInstruction;
pub use screen::{RouteRegistry, Screen};

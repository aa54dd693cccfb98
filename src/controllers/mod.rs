//! Controllers
//!
//! Field validation and orchestration per entity. Routes stay thin; the
//! rules live here.

pub mod fuel_price_controller;
pub mod refuel_controller;
pub mod vehicle_controller;

pub use fuel_price_controller::FuelPriceController;
pub use refuel_controller::RefuelController;
pub use vehicle_controller::VehicleController;
